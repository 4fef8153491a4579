//! Numeric literals.
//!
//! Plain digits scan as an integer. A `.` followed by at least one digit
//! extends it to a real; a `.` followed by anything else (or EOF) makes the
//! whole run — digits plus the dangling dot — an `Error` token (spec.md
//! §4.1). Signs are never part of a number; `+`/`-` are always separate
//! operator tokens, handled in `operator.rs`.

use super::Lexer;
use crate::TokenKind;

impl Lexer {
    pub(super) fn scan_number(&mut self) {
        let pos = self.cursor.pos();
        let mut lexeme = String::new();
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.cursor.bump();
            } else {
                break;
            }
        }

        if self.cursor.peek() == Some('.') {
            if matches!(self.cursor.peek2(), Some(d) if d.is_ascii_digit()) {
                lexeme.push('.');
                self.cursor.bump();
                while let Some(c) = self.cursor.peek() {
                    if c.is_ascii_digit() {
                        lexeme.push(c);
                        self.cursor.bump();
                    } else {
                        break;
                    }
                }
                self.push(TokenKind::RealLiteral, lexeme, pos);
            } else {
                lexeme.push('.');
                self.cursor.bump();
                self.push(TokenKind::Error, lexeme, pos);
            }
            return;
        }

        self.push(TokenKind::IntLiteral, lexeme, pos);
    }
}

#[cfg(test)]
mod tests {
    use crate::{lex, TokenKind};

    #[test]
    fn integer_literal() {
        let out = lex("123");
        assert_eq!(out.tokens[0].kind, TokenKind::IntLiteral);
        assert_eq!(out.tokens[0].lexeme, "123");
    }

    #[test]
    fn real_literal() {
        let out = lex("1.5");
        assert_eq!(out.tokens[0].kind, TokenKind::RealLiteral);
        assert_eq!(out.tokens[0].lexeme, "1.5");
    }

    #[test]
    fn dangling_dot_is_an_error_token() {
        let out = lex("12.;");
        assert_eq!(out.tokens[0].kind, TokenKind::Error);
        assert_eq!(out.tokens[0].lexeme, "12.");
        assert_eq!(out.tokens[1].lexeme, ";");
    }

    #[test]
    fn dangling_dot_at_eof() {
        let out = lex("7.");
        assert_eq!(out.tokens[0].kind, TokenKind::Error);
        assert_eq!(out.tokens[0].lexeme, "7.");
    }

    #[test]
    fn sign_is_never_part_of_number() {
        let out = lex("-5");
        assert_eq!(out.tokens[0].kind, TokenKind::ArithOp);
        assert_eq!(out.tokens[1].kind, TokenKind::IntLiteral);
    }
}
