//! triac-lex - Lexical analyzer.
//!
//! ============================================================================
//! SCANNER OVERVIEW
//! ============================================================================
//!
//! Transforms source characters into a flat sequence of classified
//! [`Token`]s carrying 1-based `(line, column)` positions. Scanning is
//! single-pass with single-character lookahead (spec.md §4.1); nothing here
//! ever fails outright — an unrecognized byte becomes an `Error` token
//! rather than aborting the scan (Testable Property 1: every character of
//! the source is covered by exactly one token).
//!
//! ```text
//! "main { int a; }"  ->  [ReservedWord("main"), Punct("{"), ReservedWord("int"),
//!                          Identifier("a"), Punct(";"), Punct("}")]
//! ```

mod cursor;
mod lexer;

pub use lexer::Lexer;

use std::fmt;
use triac_util::Pos;

/// Closed set of lexical categories (spec.md §3 "Token").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    ReservedWord,
    Identifier,
    IntLiteral,
    RealLiteral,
    /// Not one of spec.md §3's listed kinds verbatim — added so the parser
    /// can recognize the `STRING` terminal used by `output` (spec.md §4.2)
    /// without reassembling quote-delimited punctuation tokens. See
    /// DESIGN.md for the grounding.
    StringLiteral,
    ArithOp,
    RelOp,
    LogOp,
    AssignOp,
    Punct,
    Error,
}

/// An immutable lexical token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, pos: Pos) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            pos,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl TokenKind {
    /// The stable tag each kind serializes as in `tokens.txt` (spec.md §6),
    /// taken from `analizador_lexico`'s own token-type strings.
    pub const fn tag(self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "PALABRA_RESERVADA",
            TokenKind::Identifier => "IDENTIFICADOR",
            TokenKind::IntLiteral => "NUMERO_ENTERO",
            TokenKind::RealLiteral => "NUMERO_REAL",
            TokenKind::StringLiteral => "CADENA",
            TokenKind::ArithOp => "OPERADOR_ARITMETICO",
            TokenKind::RelOp => "OPERADOR_RELACIONAL",
            TokenKind::LogOp => "OPERADOR_LOGICO",
            TokenKind::AssignOp => "OPERADOR_ASIGNACION",
            TokenKind::Punct => "ESPECIAL",
            TokenKind::Error => "ERROR",
        }
    }

    /// Inverse of [`TokenKind::tag`], used by the token-file reader
    /// (spec.md §6 "Token-file parser").
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "PALABRA_RESERVADA" => TokenKind::ReservedWord,
            "IDENTIFICADOR" => TokenKind::Identifier,
            "NUMERO_ENTERO" => TokenKind::IntLiteral,
            "NUMERO_REAL" => TokenKind::RealLiteral,
            "CADENA" => TokenKind::StringLiteral,
            "OPERADOR_ARITMETICO" => TokenKind::ArithOp,
            "OPERADOR_RELACIONAL" => TokenKind::RelOp,
            "OPERADOR_LOGICO" => TokenKind::LogOp,
            "OPERADOR_ASIGNACION" => TokenKind::AssignOp,
            "ESPECIAL" => TokenKind::Punct,
            "ERROR" => TokenKind::Error,
            _ => return None,
        })
    }
}

impl fmt::Display for Token {
    /// `KIND('lexeme') en línea L, columna C` — spec.md §6 `tokens.txt`
    /// line format, taken verbatim from `Token.__repr__` in the original.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}('{}') en línea {}, columna {}",
            self.kind.tag(),
            self.lexeme,
            self.pos.line,
            self.pos.column
        )
    }
}

/// The exact reserved-word set from spec.md §4.1. `until`, `bool`, `true`,
/// `false` are deliberately absent (Open Question in spec.md §9, resolved in
/// DESIGN.md: kept as plain identifiers recognized by literal value rather
/// than promoted to keywords).
pub const RESERVED_WORDS: &[&str] = &[
    "if", "else", "end", "do", "while", "for", "switch", "case", "break", "int", "float",
    "string", "main", "cin", "cout", "def", "class", "import", "from", "return", "then",
];

pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.contains(&s)
}

/// Result of lexing: every token in `tokens` (including `Error` ones, per
/// Testable Property 1), and `errors` as the parallel convenience list of
/// just the `Error` tokens (spec.md §4.1, §6 `lex`).
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<Token>,
}

/// `lex(source) -> (tokens, errors)` — spec.md §6 external interface #1.
pub fn lex(source: &str) -> LexOutput {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod edge_cases;
