//! Comments.
//!
//! Block comments that reach EOF before a closing `*/` are accepted
//! silently — spec.md §4.1 freezes this as deliberate, matching the
//! original `analizador_lexico`'s commented-out `COMMENT_UNCLOSED` path.

use super::Lexer;

impl Lexer {
    pub(super) fn skip_line_comment(&mut self) {
        self.cursor.bump(); // '/'
        self.cursor.bump(); // '/'
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            self.cursor.bump();
        }
    }

    pub(super) fn skip_block_comment(&mut self) {
        self.cursor.bump(); // '/'
        self.cursor.bump(); // '*'
        loop {
            match self.cursor.peek() {
                None => return, // unterminated: silent accept
                Some('*') if self.cursor.peek2() == Some('/') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    return;
                }
                Some(_) => {
                    self.cursor.bump();
                }
            }
        }
    }
}
