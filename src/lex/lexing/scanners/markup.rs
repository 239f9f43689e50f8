//! `markup`: a raw HTML line, recognized by a leading `<` (spec §4.E). The
//! whole line is preserved verbatim (unlike the generic `text` scanner's
//! trimmed value), since literal HTML markup is meant to pass through
//! untouched.

use super::super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    if state.cursor.peek(1) != "<" {
        return Ok(vec![]);
    }
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let value = state.cursor.read(|c| c != '\n');
    Ok(vec![Token::new(TokenKind::Text { value }, line, offset)])
}
