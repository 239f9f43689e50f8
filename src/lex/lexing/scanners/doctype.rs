//! `doctype`: `doctype` / `!!!`, with an optional bare name (spec §4.E).

use super::super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static DOCTYPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:doctype(?=[ \t\n]|$)|!!!)(?:[ \t]*(?P<name>[^\n]+))?").unwrap()
});

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&DOCTYPE_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let name = m.get("name").map(|s| s.trim().to_string());
    state.cursor.consume_match(&m)?;
    Ok(vec![Token::new(TokenKind::Doctype { name }, line, offset)])
}
