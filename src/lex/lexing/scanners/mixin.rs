//! `mixin` / `mixinCall` (spec §4.E).
//!
//! A mixin's parameter list (`mixin foo(a, b)`) is not modeled as a distinct
//! construct: it is left for the generic `attributes` scanner to pick up on
//! the dispatcher's next pass, the same way a tag's own attribute block is —
//! the lexer does not distinguish HTML attributes from mixin parameters,
//! leaving that distinction to the downstream parser.

use super::super::state::LexState;
use super::support::{classes_then_sub, IDENT_PATTERN};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static MIXIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^mixin[ \t]+(?P<name>{})", IDENT_PATTERN)).unwrap());

static MIXIN_CALL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\+(?P<name>{})", IDENT_PATTERN)).unwrap());

pub fn scan_mixin(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&MIXIN_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let name = m.get("name").unwrap();
    state.cursor.consume_match(&m)?;
    let mut tokens = vec![Token::new(TokenKind::Mixin { name }, line, offset)];
    tokens.extend(classes_then_sub(state)?);
    Ok(tokens)
}

pub fn scan_mixin_call(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&MIXIN_CALL_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let name = m.get("name").unwrap();
    state.cursor.consume_match(&m)?;
    let mut tokens = vec![Token::new(TokenKind::MixinCall { name }, line, offset)];
    tokens.extend(classes_then_sub(state)?);
    Ok(tokens)
}
