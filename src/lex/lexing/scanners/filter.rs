//! `filter`: `:name`, followed by a verbatim text block (spec §4.E).
//!
//! Tried after `conditional`/`each`/.../`mixinCall`, so a `:filtername` line
//! only reaches here once every other colon-free keyword has failed to
//! match (filters are never bare keywords, they always start with `:`).

use super::super::state::LexState;
use super::support::{scan_text_block, IDENT_PATTERN};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static FILTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^:(?P<name>{})", IDENT_PATTERN)).unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&FILTER_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let name = m.get("name").unwrap();
    state.cursor.consume_match(&m)?;
    let mut tokens = vec![Token::new(TokenKind::Filter { name }, line, offset)];
    tokens.extend(scan_text_block(state)?);
    Ok(tokens)
}
