//! `comment`: `//` (rendered) or `//-` (silent), followed by a text block
//! whose body may start inline on the same line (spec §4.E).

use super::super::state::LexState;
use super::support::scan_text_block;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^//(?P<silent>-)?[ \t]*").unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&COMMENT_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let rendered = m.get("silent").is_none();
    state.cursor.consume_match(&m)?;
    let mut tokens = vec![Token::new(TokenKind::Comment { rendered }, line, offset)];
    tokens.extend(scan_text_block(state)?);
    Ok(tokens)
}
