//! `conditional`: `if`, `unless`, `else if` / `elseif`, `else` (spec §4.E).

use super::super::state::LexState;
use super::support::{read_subject, scan_sub, skip_spaces};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static CONDITIONAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<kw>else[ \t]+if|elseif|if|unless|else)(?=[:( \t\n]|$)").unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&CONDITIONAL_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let name: String = m
        .get("kw")
        .unwrap()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("");
    state.cursor.consume_match(&m)?;
    skip_spaces(state);
    let subject = read_subject(state)?;
    let mut tokens = vec![Token::new(TokenKind::Conditional { name, subject }, line, offset)];
    tokens.extend(scan_sub(state)?);
    Ok(tokens)
}
