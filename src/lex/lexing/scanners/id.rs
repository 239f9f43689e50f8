//! `id`: `#name` (spec §4.E).

use super::super::state::LexState;
use super::support::{classes_then_sub, IDENT_PATTERN};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^#(?P<name>{})", IDENT_PATTERN)).unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&ID_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let name = m.get("name").unwrap();
    state.cursor.consume_match(&m)?;
    let mut tokens = vec![Token::new(TokenKind::Id { name }, line, offset)];
    tokens.extend(classes_then_sub(state)?);
    Ok(tokens)
}
