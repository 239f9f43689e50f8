//! Property tests for the invariants spec §8 names: indent/outdent balance,
//! attributeStart/attributeEnd pairing, non-decreasing line numbers,
//! determinism, and `\r`-stripping idempotence.

use jade_lex::{Lexer, LexerOptions, TokenKind};
use proptest::prelude::*;

fn lex(src: &str) -> Option<Vec<jade_lex::Token>> {
    Lexer::new(src, LexerOptions::default())
        .collect::<Result<Vec<_>, _>>()
        .ok()
}

/// Builds a document of nested tags, one level deeper per line, using two
/// spaces per indent level — always well-formed, so lexing never errors.
fn nested_tags(depth: usize) -> String {
    let mut out = String::new();
    for i in 0..depth {
        out.push_str(&"  ".repeat(i));
        out.push_str(&format!("tag{}\n", i));
    }
    out
}

proptest! {
    #[test]
    fn indent_and_outdent_always_balance(depth in 0usize..12) {
        let src = nested_tags(depth);
        let tokens = lex(&src).expect("well-formed nesting should lex cleanly");
        let mut level: i64 = 0;
        for t in &tokens {
            match t.kind {
                TokenKind::Indent => level += 1,
                TokenKind::Outdent => level -= 1,
                _ => {}
            }
        }
        prop_assert_eq!(level, 0);
    }

    #[test]
    fn attribute_start_and_end_always_pair(names in prop::collection::vec("[a-z]{1,6}", 0..5)) {
        let attrs: Vec<String> = names.iter().map(|n| n.clone()).collect();
        let src = format!("div({})\n", attrs.join(", "));
        let tokens = lex(&src).expect("simple attribute lists should lex cleanly");
        let starts = tokens.iter().filter(|t| matches!(t.kind, TokenKind::AttributeStart)).count();
        let ends = tokens.iter().filter(|t| matches!(t.kind, TokenKind::AttributeEnd)).count();
        prop_assert_eq!(starts, ends);
    }

    #[test]
    fn line_numbers_never_decrease(depth in 0usize..12) {
        let src = nested_tags(depth);
        let tokens = lex(&src).expect("well-formed nesting should lex cleanly");
        let mut last_line = 0;
        for t in &tokens {
            prop_assert!(t.line >= last_line);
            last_line = t.line;
        }
    }

    #[test]
    fn lexing_is_deterministic(depth in 0usize..8) {
        let src = nested_tags(depth);
        let a = lex(&src);
        let b = lex(&src);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn stripping_carriage_returns_is_idempotent(depth in 0usize..8) {
        let src = nested_tags(depth);
        let with_cr = src.replace('\n', "\r\n");
        let once = lex(&with_cr);
        let twice = lex(&with_cr.replace('\n', "\n"));
        prop_assert_eq!(once, twice);
    }
}
