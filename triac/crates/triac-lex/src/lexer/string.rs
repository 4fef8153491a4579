//! Quoted string literals.
//!
//! Needed for the `STRING` terminal in `output` (spec.md §4.2) and the
//! quoted-literal convention the interpreter already expects on quadruple
//! addresses (spec.md §4.5: "a text wrapped in double quotes is a string
//! literal"). The lexeme is kept with its surrounding quotes so it flows
//! unchanged into AST `cadena` nodes and `wri` operands.

use super::Lexer;
use crate::TokenKind;

impl Lexer {
    pub(super) fn scan_string(&mut self) {
        let pos = self.cursor.pos();
        let mut lexeme = String::from("\"");
        self.cursor.bump(); // opening quote

        loop {
            match self.cursor.peek() {
                None => {
                    // Unterminated: no closing quote before EOF.
                    self.push(TokenKind::Error, lexeme, pos);
                    return;
                }
                Some('"') => {
                    self.cursor.bump();
                    lexeme.push('"');
                    self.push(TokenKind::StringLiteral, lexeme, pos);
                    return;
                }
                Some('\n') => {
                    // A bare newline inside a string is not supported by
                    // this grammar's single-line statements; treat the run
                    // so far as malformed rather than swallowing the rest
                    // of the program.
                    self.push(TokenKind::Error, lexeme, pos);
                    return;
                }
                Some(c) => {
                    lexeme.push(c);
                    self.cursor.bump();
                }
            }
        }
    }
}
