//! The lex driver (spec §4.F): normalizes the source, then exposes the
//! token stream as a lazy, pull-based iterator.
//!
//! Grounded on the teacher's `lex()` entry point in
//! `lex-parser/src/lex/lexing.rs`, which normalizes its source with
//! `ensure_source_ends_with_newline()` before handing it to the base
//! tokenizer. A single internal buffer absorbs the fact that one dispatch
//! step can yield more than one token (e.g. several `Outdent`s at once);
//! the boundary between tokens handed to the caller is the only suspension
//! point (spec §5 — no shared mutable state survives across calls beyond
//! this struct itself).

use super::dispatcher::Dispatcher;
use super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::options::LexerOptions;
use crate::lex::token::{Token, TokenKind};
use std::collections::VecDeque;

/// Strips `\r` and NUL bytes, trims trailing whitespace, and appends exactly
/// one terminating `\n` (spec §4.F).
fn normalize(source: &str) -> String {
    let mut cleaned: String = source.chars().filter(|&c| c != '\r' && c != '\0').collect();
    let trimmed_len = cleaned.trim_end().len();
    cleaned.truncate(trimmed_len);
    cleaned.push('\n');
    cleaned
}

pub struct Lexer {
    state: LexState,
    dispatcher: Dispatcher,
    buffer: VecDeque<Token>,
    done: bool,
}

impl Lexer {
    pub fn new(source: &str, options: LexerOptions) -> Self {
        let normalized = normalize(source);
        Lexer {
            state: LexState::new(normalized, &options),
            dispatcher: Dispatcher::new(),
            buffer: VecDeque::new(),
            done: false,
        }
    }

    fn emit_trailing_outdents(&mut self) {
        if self.state.level > 0 {
            let line = self.state.cursor.line();
            let offset = self.state.cursor.offset();
            for _ in 0..self.state.level {
                self.buffer
                    .push_back(Token::new(TokenKind::Outdent, line, offset));
            }
            self.state.level = 0;
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(tok) = self.buffer.pop_front() {
            return Some(Ok(tok));
        }
        if self.done {
            return None;
        }

        loop {
            if self.state.cursor.is_at_end() {
                self.emit_trailing_outdents();
                self.done = true;
                return self.buffer.pop_front().map(Ok);
            }

            match self.dispatcher.try_scanners(&mut self.state) {
                Ok(Some(tokens)) => {
                    self.buffer.extend(tokens);
                    return self.buffer.pop_front().map(Ok);
                }
                Ok(None) => {
                    let spaces = self.state.cursor.read(|c| c == ' ' || c == '\t');
                    if !spaces.is_empty() {
                        continue;
                    }
                    if self.state.cursor.is_at_end() {
                        continue;
                    }
                    let found = self.state.cursor.peek(20);
                    let expected = self.dispatcher.scanner_names();
                    self.done = true;
                    return Some(Err(LexError::unexpected_input(
                        found,
                        expected,
                        self.state.cursor.line(),
                        self.state.cursor.offset(),
                    )));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::token::TokenKind;

    fn lex(src: &str) -> Vec<Token> {
        Lexer::new(src, LexerOptions::default())
            .collect::<Result<Vec<_>, _>>()
            .expect("lexing should succeed")
    }

    fn kinds(tokens: &[Token]) -> Vec<&'static str> {
        tokens.iter().map(|t| t.type_name()).collect()
    }

    #[test]
    fn simple_tag_with_class() {
        let tokens = lex("div.container\n");
        assert_eq!(kinds(&tokens), vec!["tag", "class", "newLine"]);
        assert!(matches!(&tokens[0].kind, TokenKind::Tag{ name } if name == "div"));
        assert!(matches!(&tokens[1].kind, TokenKind::Class{ name } if name == "container"));
    }

    #[test]
    fn indent_and_outdent_are_balanced() {
        let tokens = lex("div\n  span\np\n");
        assert_eq!(
            kinds(&tokens),
            vec![
                "tag", "newLine", "indent", "tag", "newLine", "outdent", "tag", "newLine"
            ]
        );
    }

    #[test]
    fn trailing_outdents_close_the_stream() {
        let tokens = lex("div\n  span\n    em\n");
        let last_two: Vec<_> = kinds(&tokens).into_iter().rev().take(2).collect();
        assert_eq!(last_two, vec!["outdent", "outdent"]);
    }

    #[test]
    fn attributes_with_nested_expression() {
        let tokens = lex("a(href=\"/x?y=1\", class=fn(a, b))\n");
        assert_eq!(
            kinds(&tokens),
            vec!["tag", "attributeStart", "attribute", "attribute", "attributeEnd", "newLine"]
        );
        if let TokenKind::Attribute { name, value, .. } = &tokens[2].kind {
            assert_eq!(name.as_deref(), Some("href"));
            assert_eq!(value.as_deref(), Some("\"/x?y=1\""));
        } else {
            panic!("expected attribute token");
        }
        if let TokenKind::Attribute { name, value, .. } = &tokens[3].kind {
            assert_eq!(name.as_deref(), Some("class"));
            assert_eq!(value.as_deref(), Some("fn(a, b)"));
        } else {
            panic!("expected attribute token");
        }
    }

    #[test]
    fn each_statement() {
        let tokens = lex("each item, i in items\n  li= item\n");
        assert!(matches!(
            &tokens[0].kind,
            TokenKind::Each { item_name, key_name, subject }
                if item_name == "item" && key_name.as_deref() == Some("i") && subject == "items"
        ));
    }

    #[test]
    fn over_indent_is_a_fatal_error() {
        // First indent establishes a 2-space width at level 1; jumping
        // straight to 6 spaces (level 3) skips a level.
        let err = Lexer::new("div\n  span\n      em\n", LexerOptions::default())
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(
            err.kind,
            crate::lex::error::LexErrorKind::OverIndent
        ));
    }

    #[test]
    fn mixed_indentation_across_lines_is_a_fatal_error() {
        let err = Lexer::new("div\n  span\n\tp\n", LexerOptions::default())
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(
            err.kind,
            crate::lex::error::LexErrorKind::MixedIndentationAcrossLines
        ));
    }
}
