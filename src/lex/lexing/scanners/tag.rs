//! `tag`: a bare identifier naming an element (spec §4.E).
//!
//! Tried after every keyword-led scanner (`import`, `block`, the control
//! family, `mixin`/`mixinCall`, `doctype`), so by the time this scanner is
//! reached any reserved word has already been claimed.

use super::super::state::LexState;
use super::support::{classes_then_sub, IDENT_PATTERN};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^(?P<name>{})", IDENT_PATTERN)).unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&TAG_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let name = m.get("name").unwrap();
    state.cursor.consume_match(&m)?;
    let mut tokens = vec![Token::new(TokenKind::Tag { name }, line, offset)];
    tokens.extend(classes_then_sub(state)?);
    Ok(tokens)
}
