//! Arithmetic, relational/assignment, and logical operators.
//!
//! `++`/`--` double greedily: a run of `n` identical `+` (or `-`) chars
//! yields `n/2` doubled tokens followed by one leftover single-char token
//! if `n` is odd (spec.md §4.1: "three or more do not collapse further ...
//! emit as many single ops as remain after any doubled pair is taken
//! greedily"). `&&`/`||` follow the identical rule, but a leftover single
//! `&`/`|` is a `Punct`, not an `ArithOp` (spec.md: "a single & or | is
//! either emitted as a punctuation-class special token or ERROR
//! (implementer choice)" — this implementation picks punctuation, mirroring
//! the original `analizador_lexico`'s `ESPECIAL` token).

use super::Lexer;
use crate::TokenKind;

impl Lexer {
    pub(super) fn scan_arithmetic(&mut self) {
        let c = self.cursor.peek().unwrap();
        if c == '+' || c == '-' {
            self.scan_doubled(c, TokenKind::ArithOp, if c == '+' { "++" } else { "--" });
            return;
        }
        // '*', '/', '%', '^' never double.
        let pos = self.cursor.pos();
        self.cursor.bump();
        self.push(TokenKind::ArithOp, c.to_string(), pos);
    }

    /// Shared greedy-doubling scan used for `+`/`-` (arithmetic) and `&`/`|`
    /// (logical): count a run of `c`, emit `run/2` doubled tokens of `kind`
    /// with lexeme `doubled`, then one leftover single-char token if the run
    /// is odd. The leftover token's kind matches the single-char meaning of
    /// `c` (arithmetic op for `+`/`-`, punctuation for `&`/`|`).
    pub(super) fn scan_doubled(&mut self, c: char, kind: TokenKind, doubled: &str) {
        let start = self.cursor.pos();
        let mut run = 0u32;
        let mut run_start = start;
        while self.cursor.peek() == Some(c) {
            if run == 0 {
                run_start = self.cursor.pos();
            }
            self.cursor.bump();
            run += 1;
        }

        let pairs = run / 2;
        let mut pos = run_start;
        for _ in 0..pairs {
            self.push(kind, doubled, pos);
            pos.advance_column(2);
        }
        if run % 2 == 1 {
            let leftover_kind = if matches!(c, '+' | '-') {
                TokenKind::ArithOp
            } else {
                TokenKind::Punct
            };
            self.push(leftover_kind, c.to_string(), pos);
        }
    }

    /// `<`, `>`, `!`, `=`: doubled with `=` forms a relational/equality op;
    /// `<<`/`>>` double on themselves; otherwise each is a single-char
    /// token (`=` alone is the assignment operator, the others are
    /// relational — matching `OPERADOR_RELACIONAL` for a lone `!` in the
    /// original scanner; the parser treats `!` as logical-not by grammar
    /// position, not by lexical kind).
    pub(super) fn scan_relational_or_assign(&mut self) {
        let pos = self.cursor.pos();
        let c = self.cursor.peek().unwrap();
        self.cursor.bump();

        if self.cursor.peek() == Some('=') {
            self.cursor.bump();
            let lexeme = format!("{c}=");
            self.push(TokenKind::RelOp, lexeme, pos);
            return;
        }
        if (c == '<' || c == '>') && self.cursor.peek() == Some(c) {
            self.cursor.bump();
            let lexeme = format!("{c}{c}");
            self.push(TokenKind::RelOp, lexeme, pos);
            return;
        }
        if c == '=' {
            self.push(TokenKind::AssignOp, "=", pos);
        } else {
            self.push(TokenKind::RelOp, c.to_string(), pos);
        }
    }
}
