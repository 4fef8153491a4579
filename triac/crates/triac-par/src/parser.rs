use crate::ast::AstNode;
use triac_lex::{Token, TokenKind};
use triac_util::{Diagnostic, DiagnosticCategory, Pos};

/// Declaration-context synchronization set (spec.md §4.2).
pub(crate) const SYNC_DECL: &[&str] = &[";", "int", "float", "bool", "}"];
/// Statement-context synchronization set (spec.md §4.2).
pub(crate) const SYNC_STMT: &[&str] = &[";", "if", "while", "do", "cin", "cout", "}"];
/// Safety cap on tokens discarded per resynchronization.
const MAX_SKIP: usize = 50;

pub struct Parser<'a> {
    tokens: Vec<&'a Token>,
    idx: usize,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        // "Input is the token sequence filtered to exclude ERROR tokens" (§4.2).
        let tokens = tokens.iter().filter(|t| !t.is_error()).collect();
        Self {
            tokens,
            idx: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn parse_program(&mut self) -> Option<AstNode> {
        crate::decl::program(self)
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    // -- cursor helpers ---------------------------------------------------

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.idx).copied()
    }

    pub(crate) fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.idx + 1).copied()
    }

    pub(crate) fn at_end(&self) -> bool {
        self.idx >= self.tokens.len()
    }

    /// Token cursor position, used to detect whether a failed production
    /// consumed anything before falling back to resynchronization.
    pub(crate) fn position(&self) -> usize {
        self.idx
    }

    pub(crate) fn current_pos(&self) -> Pos {
        self.peek()
            .map(|t| t.pos)
            .or_else(|| self.tokens.last().map(|t| t.pos))
            .unwrap_or_default()
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let t = self.peek();
        if t.is_some() {
            self.idx += 1;
        }
        t
    }

    /// Does the current token's lexeme equal `lexeme`?
    pub(crate) fn check(&self, lexeme: &str) -> bool {
        self.peek().is_some_and(|t| t.lexeme == lexeme)
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Consume the current token if its lexeme matches, returning it.
    pub(crate) fn eat(&mut self, lexeme: &str) -> Option<&'a Token> {
        if self.check(lexeme) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume a token whose lexeme matches `lexeme` or report
    /// `PARSE_EXPECT` and return `None` without consuming.
    pub(crate) fn expect(&mut self, lexeme: &str) -> Option<&'a Token> {
        if let Some(t) = self.eat(lexeme) {
            return Some(t);
        }
        let found = self
            .peek()
            .map(|t| t.lexeme.clone())
            .unwrap_or_else(|| "EOF".to_string());
        self.diagnostics.push(Diagnostic::new(
            DiagnosticCategory::ParseExpect,
            format!("se esperaba '{lexeme}' pero se encontró '{found}'"),
            self.current_pos(),
        ));
        None
    }

    /// Consume an `Identifier` token or report `PARSE_EXPECT`.
    pub(crate) fn expect_identifier(&mut self) -> Option<&'a Token> {
        if self.check_kind(TokenKind::Identifier) {
            return self.advance();
        }
        let found = self
            .peek()
            .map(|t| t.lexeme.clone())
            .unwrap_or_else(|| "EOF".to_string());
        self.diagnostics.push(Diagnostic::new(
            DiagnosticCategory::ParseExpect,
            format!("se esperaba un identificador pero se encontró '{found}'"),
            self.current_pos(),
        ));
        None
    }

    pub(crate) fn report_unexpected(&mut self, context: &str) {
        let found = self
            .peek()
            .map(|t| t.lexeme.clone())
            .unwrap_or_else(|| "EOF".to_string());
        self.diagnostics.push(Diagnostic::new(
            DiagnosticCategory::ParseUnexpected,
            format!("token inesperado '{found}' en {context}"),
            self.current_pos(),
        ));
    }

    /// Discard tokens until one whose lexeme is in `sync_set` is found, EOF
    /// is reached, or the safety cap is hit.
    pub(crate) fn synchronize(&mut self, sync_set: &[&str]) {
        let mut skipped = 0;
        while !self.at_end() && skipped < MAX_SKIP {
            if let Some(t) = self.peek() {
                if sync_set.contains(&t.lexeme.as_str()) {
                    return;
                }
            }
            self.advance();
            skipped += 1;
        }
    }
}
