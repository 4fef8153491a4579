mod comment;
mod identifier;
mod number;
mod operator;
mod string;

use crate::cursor::Cursor;
use crate::{LexOutput, Token, TokenKind};
use triac_util::Pos;

/// The scanner. One [`Lexer`] per source string; `tokenize` consumes it.
pub struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(src: &str) -> Self {
        Self {
            cursor: Cursor::new(src),
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> LexOutput {
        while !self.cursor.is_eof() {
            self.scan_one();
        }
        let errors = self
            .tokens
            .iter()
            .filter(|t| t.is_error())
            .cloned()
            .collect();
        LexOutput {
            tokens: self.tokens,
            errors,
        }
    }

    fn push(&mut self, kind: TokenKind, lexeme: impl Into<String>, pos: Pos) {
        self.tokens.push(Token::new(kind, lexeme, pos));
    }

    /// Scan exactly one token's worth of input (or skip exactly one
    /// whitespace/comment run), advancing the cursor.
    fn scan_one(&mut self) {
        let c = match self.cursor.peek() {
            Some(c) => c,
            None => return,
        };

        if c == ' ' || c == '\t' {
            self.cursor.bump();
            return;
        }
        if c == '\n' {
            self.cursor.bump();
            return;
        }
        if c == '/' && self.cursor.peek2() == Some('/') {
            self.skip_line_comment();
            return;
        }
        if c == '/' && self.cursor.peek2() == Some('*') {
            self.skip_block_comment();
            return;
        }
        if c.is_alphabetic() {
            self.scan_identifier();
            return;
        }
        if c.is_ascii_digit() {
            self.scan_number();
            return;
        }
        if c == '"' {
            self.scan_string();
            return;
        }
        if matches!(c, '+' | '-' | '*' | '/' | '%' | '^') {
            self.scan_arithmetic();
            return;
        }
        if matches!(c, '<' | '>' | '!' | '=') {
            self.scan_relational_or_assign();
            return;
        }
        if c == '&' {
            self.scan_doubled('&', TokenKind::LogOp, "&&");
            return;
        }
        if c == '|' {
            self.scan_doubled('|', TokenKind::LogOp, "||");
            return;
        }
        if "(){}[];,:'°".contains(c) {
            let pos = self.cursor.pos();
            self.cursor.bump();
            self.push(TokenKind::Punct, c.to_string(), pos);
            return;
        }

        let pos = self.cursor.pos();
        self.cursor.bump();
        self.push(TokenKind::Error, c.to_string(), pos);
    }
}
