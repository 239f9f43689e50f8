//! `when`: `when <subject>` / `default` (spec §4.E).

use super::super::state::LexState;
use super::support::{read_subject, scan_sub, skip_spaces};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static WHEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<kw>when|default)(?=[( \t\n:]|$)").unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&WHEN_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let kw = m.get("kw").unwrap();
    let default = kw == "default";
    state.cursor.consume_match(&m)?;
    skip_spaces(state);
    let subject = read_subject(state)?;
    let mut tokens = vec![Token::new(
        TokenKind::When {
            name: kw,
            default,
            subject,
        },
        line,
        offset,
    )];
    tokens.extend(scan_sub(state)?);
    Ok(tokens)
}
