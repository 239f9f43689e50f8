//! `do` / `while` (spec §4.E): the two halves of a do-while loop. `do` takes
//! no subject; `while` reads one the same way the other control statements
//! do.

use super::super::state::LexState;
use super::support::{read_subject, scan_sub, skip_spaces};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static DO_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^do(?=[: \t\n]|$)").unwrap());
static WHILE_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^while(?=[( \t\n]|$)").unwrap());

pub fn scan_do(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&DO_KEYWORD) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    state.cursor.consume_match(&m)?;
    let mut tokens = vec![Token::new(TokenKind::Do, line, offset)];
    tokens.extend(scan_sub(state)?);
    Ok(tokens)
}

pub fn scan_while(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&WHILE_KEYWORD) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    state.cursor.consume_match(&m)?;
    skip_spaces(state);
    let subject = read_subject(state)?;
    let mut tokens = vec![Token::new(TokenKind::While { subject }, line, offset)];
    tokens.extend(scan_sub(state)?);
    Ok(tokens)
}
