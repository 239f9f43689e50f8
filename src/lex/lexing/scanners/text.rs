//! `text`: the terminal fallback — whatever is left on the line, once every
//! other scanner has declined (spec §4.E).
//!
//! Only "wins" (consumes, and so counts as a match for the dispatcher) when
//! the line has non-whitespace content; a whitespace-only remainder is left
//! for the dispatcher's own leading-space skip, so this scanner never
//! manufactures a stray empty token.

use super::super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static TEXT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\n]*").unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&TEXT_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let trimmed = m.full.trim().to_string();
    if trimmed.is_empty() {
        return Ok(vec![]);
    }
    state.cursor.consume_match(&m)?;
    Ok(vec![Token::new(TokenKind::Text { value: trimmed }, line, offset)])
}
