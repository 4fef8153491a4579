//! Cross-cutting invariant tests that don't belong to any single scan rule.

use crate::{lex, Token, TokenKind};
use triac_util::Pos;

#[test]
fn token_display_matches_tokens_txt_format() {
    let t = Token::new(TokenKind::Identifier, "a", Pos::new(3, 5));
    assert_eq!(t.to_string(), "IDENTIFICADOR('a') en línea 3, columna 5");
}

#[test]
fn every_tag_round_trips_through_from_tag() {
    let kinds = [
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::IntLiteral,
        TokenKind::RealLiteral,
        TokenKind::StringLiteral,
        TokenKind::ArithOp,
        TokenKind::RelOp,
        TokenKind::LogOp,
        TokenKind::AssignOp,
        TokenKind::Punct,
        TokenKind::Error,
    ];
    for kind in kinds {
        assert_eq!(TokenKind::from_tag(kind.tag()), Some(kind));
    }
}

#[test]
fn every_character_is_covered_by_exactly_one_token_or_error() {
    // Testable Property 1 (spec.md §8): includes an unrecognized char `@`.
    let out = lex("int a; a = 1 @ 2;");
    assert!(out.tokens.iter().any(|t| t.kind == TokenKind::Error && t.lexeme == "@"));
}

#[test]
fn positions_are_non_decreasing() {
    let out = lex("main {\n  int a;\n  a = 1;\n}");
    let mut last = (0u32, 0u32);
    for t in &out.tokens {
        let cur = (t.pos.line, t.pos.column);
        assert!(cur >= last, "positions regressed: {last:?} -> {cur:?}");
        last = cur;
    }
}

#[test]
fn percent_is_lexed_as_arithmetic_modulo() {
    let out = lex("a % b");
    assert_eq!(out.tokens[1].kind, TokenKind::ArithOp);
    assert_eq!(out.tokens[1].lexeme, "%");
}

#[test]
fn empty_source_yields_no_tokens() {
    let out = lex("");
    assert!(out.tokens.is_empty());
}

#[test]
fn whitespace_only_source_yields_no_tokens() {
    let out = lex("   \t\n\n  ");
    assert!(out.tokens.is_empty());
}

#[test]
fn scenario_a_first_ten_tokens() {
    // spec.md §8 Scenario A.
    let out = lex("main { int a; a = 2 + 3; cout << a; }");
    let kinds: Vec<_> = out.tokens.iter().take(10).map(|t| (t.kind, t.lexeme.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (TokenKind::ReservedWord, "main"),
            (TokenKind::Punct, "{"),
            (TokenKind::ReservedWord, "int"),
            (TokenKind::Identifier, "a"),
            (TokenKind::Punct, ";"),
            (TokenKind::Identifier, "a"),
            (TokenKind::AssignOp, "="),
            (TokenKind::IntLiteral, "2"),
            (TokenKind::ArithOp, "+"),
            (TokenKind::IntLiteral, "3"),
        ]
    );
}
