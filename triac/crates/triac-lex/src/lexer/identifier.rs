//! Identifiers and reserved words.
//!
//! `[A-Za-z][A-Za-z0-9_]*`. `until`, `bool`, `true`, `false` fall through
//! to `Identifier` here — the parser and semantic analyzer recognize them
//! by literal value where needed (spec.md §9 Open Question, resolved).

use super::Lexer;
use crate::{is_reserved_word, TokenKind};

impl Lexer {
    pub(super) fn scan_identifier(&mut self) {
        let pos = self.cursor.pos();
        let mut lexeme = String::new();
        while let Some(c) = self.cursor.peek() {
            if c.is_alphanumeric() || c == '_' {
                lexeme.push(c);
                self.cursor.bump();
            } else {
                break;
            }
        }
        let kind = if is_reserved_word(&lexeme) {
            TokenKind::ReservedWord
        } else {
            TokenKind::Identifier
        };
        self.push(kind, lexeme, pos);
    }
}
