//! Integration tests for the six concrete scenarios spec §8 names, plus the
//! fatal-error taxonomy from spec §7. Table-driven with `rstest`, following
//! the teacher's own scenario-test style.

use jade_lex::{LexError, LexErrorKind, Lexer, LexerOptions, TokenKind};
use rstest::rstest;

fn lex_ok(src: &str) -> Vec<jade_lex::Token> {
    Lexer::new(src, LexerOptions::default())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| panic!("expected success, got {}", e))
}

fn lex_err(src: &str) -> LexError {
    Lexer::new(src, LexerOptions::default())
        .collect::<Result<Vec<_>, _>>()
        .expect_err("expected a fatal error")
}

#[test]
fn simple_tag_with_class() {
    let tokens = lex_ok("div.container\n");
    let kinds: Vec<_> = tokens.iter().map(|t| t.type_name()).collect();
    assert_eq!(kinds, vec!["tag", "class", "newLine"]);
}

#[test]
fn indent_then_outdent() {
    let tokens = lex_ok("ul\n  li\n  li\n");
    let kinds: Vec<_> = tokens.iter().map(|t| t.type_name()).collect();
    assert_eq!(
        kinds,
        vec![
            "tag", "newLine", "indent", "tag", "newLine", "tag", "newLine", "outdent"
        ]
    );
}

#[test]
fn attributes_with_nested_brackets_and_strings() {
    let tokens = lex_ok("input(type=\"text\", data-items=[1, 2, 3])\n");
    let attribute_values: Vec<_> = tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Attribute { value, .. } => value.clone(),
            _ => None,
        })
        .collect();
    assert_eq!(
        attribute_values,
        vec!["\"text\"".to_string(), "[1, 2, 3]".to_string()]
    );
}

#[test]
fn each_statement_with_key() {
    let tokens = lex_ok("each value, key in collection\n  li= value\n");
    assert!(matches!(
        &tokens[0].kind,
        TokenKind::Each { item_name, key_name, subject }
            if item_name == "value" && key_name.as_deref() == Some("key") && subject == "collection"
    ));
}

#[test]
fn over_indent_is_rejected() {
    let err = lex_err("div\n  span\n      em\n");
    assert_eq!(err.kind, LexErrorKind::OverIndent);
}

#[test]
fn mixed_tabs_and_spaces_across_lines_is_rejected() {
    let err = lex_err("div\n  span\n\tp\n");
    assert_eq!(err.kind, LexErrorKind::MixedIndentationAcrossLines);
}

#[rstest]
#[case("div", "tag")]
#[case("#main", "id")]
#[case(".wrapper", "class")]
#[case("doctype html", "doctype")]
#[case("mixin button", "mixin")]
#[case("+button", "mixinCall")]
#[case("if loggedIn", "conditional")]
#[case("case value", "case")]
#[case("when 1", "when")]
#[case("do", "do")]
#[case("while more", "while")]
#[case("//-silent comment", "comment")]
#[case(":markdown", "filter")]
#[case("- var x = 1", "expression")]
#[case("= value", "expression")]
#[case("<div>raw</div>", "text")]
#[case("| plain text", "text")]
#[case("&attributes(locals)", "assignment")]
#[case("extends layout", "import")]
#[case("block content", "block")]
fn each_scanner_produces_its_token(#[case] line: &str, #[case] expected_kind: &str) {
    let tokens = lex_ok(&format!("{}\n", line));
    assert_eq!(
        tokens[0].type_name(),
        expected_kind,
        "line {:?} should start with a {} token",
        line,
        expected_kind
    );
}

#[test]
fn unclosed_attribute_block_is_rejected() {
    let err = lex_err("input(type=\"text\"\n");
    assert_eq!(err.kind, LexErrorKind::UnclosedAttributeBlock);
}

#[test]
fn malformed_each_is_rejected() {
    let err = lex_err("each\n");
    assert_eq!(err.kind, LexErrorKind::MalformedEach);
}

#[test]
fn blockquote_is_a_tag_not_a_block_keyword() {
    let tokens = lex_ok("blockquote\n  p hi\n");
    let kinds: Vec<_> = tokens.iter().map(|t| t.type_name()).collect();
    assert_eq!(
        kinds,
        vec!["tag", "newLine", "indent", "tag", "text", "newLine", "outdent"]
    );
    assert!(matches!(&tokens[0].kind, TokenKind::Tag { name } if name == "blockquote"));
}

#[test]
fn doctype_keyword_is_not_a_prefix_match() {
    let tokens = lex_ok("doctypefoo\n");
    assert_eq!(tokens[0].type_name(), "tag");
    assert!(matches!(&tokens[0].kind, TokenKind::Tag { name } if name == "doctypefoo"));
}

#[test]
fn bang_doctype_shorthand_without_space() {
    let tokens = lex_ok("!!!5\n");
    assert_eq!(tokens[0].type_name(), "doctype");
    assert!(matches!(&tokens[0].kind, TokenKind::Doctype { name } if name.as_deref() == Some("5")));
}
