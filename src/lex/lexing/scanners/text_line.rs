//! `textLine`: a line opening with `|`, piped straight into a text block
//! (spec §4.E).

use super::super::state::LexState;
use super::support::scan_text_block;
use crate::lex::error::LexError;
use crate::lex::token::Token;

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    if state.cursor.peek(1) != "|" {
        return Ok(vec![]);
    }
    let _ = state.cursor.consume(1);
    scan_text_block(state)
}
