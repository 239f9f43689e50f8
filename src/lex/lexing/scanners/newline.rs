//! `newLine`: a bare `\n` at the head of the cursor (spec §4.E).
//!
//! Kept first in the dispatcher order so every other scanner can assume it
//! never has to special-case a line break itself.

use super::super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n").unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    if state.cursor.try_match(&NEWLINE_REGEX).is_none() {
        return Ok(vec![]);
    }
    state.cursor.consume(1)?;
    Ok(vec![Token::new(TokenKind::NewLine, line, offset)])
}
