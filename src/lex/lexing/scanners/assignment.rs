//! `assignment`: `&name` (spec §4.E), e.g. `&attributes(locals)` mixin
//! attribute blocks. No classes/sub tail — per the scanner table, assignment
//! stands alone.

use super::super::state::LexState;
use super::support::IDENT_PATTERN;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static ASSIGNMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^&(?P<name>{})", IDENT_PATTERN)).unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&ASSIGNMENT_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let name = m.get("name").unwrap();
    state.cursor.consume_match(&m)?;
    Ok(vec![Token::new(TokenKind::Assignment { name }, line, offset)])
}
