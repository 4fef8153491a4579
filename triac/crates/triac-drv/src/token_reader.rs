//! Reads a `tokens.txt`-shaped file back into [`Token`]s (spec.md §6
//! "Token-file parser"). Not grounded in the original — neither Python
//! source round-trips its own token dump — so this is authored directly
//! from spec.md's two accepted line shapes:
//!
//! - verbose: `KIND('lexeme') en línea L, columna C`
//! - shortened: `KIND('lexeme')`, where position defaults to the file's own
//!   line number and column 1.
//!
//! A line matching neither shape is skipped rather than surfaced as an
//! error — this reader is a convenience for re-loading an already-produced
//! artifact, not one of the five numbered API stages that return
//! diagnostics (spec.md §6).

use triac_lex::{Token, TokenKind};
use triac_util::Pos;

pub fn read_tokens(text: &str) -> Vec<Token> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(line, i as u32 + 1))
        .collect()
}

fn parse_line(line: &str, file_line_no: u32) -> Option<Token> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let open = line.find("('")?;
    let kind_tag = &line[..open];
    let kind = TokenKind::from_tag(kind_tag)?;

    let rest = &line[open + 2..];

    if let Some(pos_marker) = rest.find("') en línea ") {
        let lexeme = &rest[..pos_marker];
        let pos_str = &rest[pos_marker + "') en línea ".len()..];
        let (line_no, col_no) = parse_position(pos_str)?;
        return Some(Token::new(kind, lexeme, Pos::new(line_no, col_no)));
    }

    let close = rest.find("')")?;
    let lexeme = &rest[..close];
    Some(Token::new(kind, lexeme, Pos::new(file_line_no, 1)))
}

/// Parses the tail of a verbose line, `L, columna C`, into `(L, C)`.
fn parse_position(s: &str) -> Option<(u32, u32)> {
    let (line_str, col_str) = s.split_once(", columna ")?;
    let line_no: u32 = line_str.trim().parse().ok()?;
    let col_no: u32 = col_str.trim().parse().ok()?;
    Some((line_no, col_no))
}
