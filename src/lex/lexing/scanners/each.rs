//! `each`: `each [$]itemName[, [$]keyName] in <subject>` (spec §4.E).
//!
//! The keyword-without-a-valid-header case is the one place spec §7's
//! `MalformedEach` error is raised.

use super::super::state::LexState;
use super::support::{read_subject, scan_sub};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static EACH_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^each(?=[: \t\n]|$)").unwrap());

static EACH_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^each[ \t]+\$?(?P<item>[A-Za-z_][A-Za-z0-9_\-]*)([ \t]*,[ \t]*\$?(?P<key>[A-Za-z_][A-Za-z0-9_\-]*))?[ \t]+in[ \t]*",
    )
    .unwrap()
});

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();

    if state.cursor.try_match(&EACH_KEYWORD).is_none() {
        return Ok(vec![]);
    }

    let m = match state.cursor.try_match(&EACH_HEADER) {
        Some(m) => m,
        None => return Err(LexError::malformed_each(line, offset)),
    };
    let item_name = m
        .get("item")
        .ok_or_else(|| LexError::malformed_each(line, offset))?;
    let key_name = m.get("key");
    state.cursor.consume_match(&m)?;

    let subject = read_subject(state)?.unwrap_or_default();

    let mut tokens = vec![Token::new(
        TokenKind::Each {
            item_name,
            key_name,
            subject,
        },
        line,
        offset,
    )];
    tokens.extend(scan_sub(state)?);
    Ok(tokens)
}
