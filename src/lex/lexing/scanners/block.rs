//! `block`: the `Non-goal`-adjacent inheritance marker, preserved with its
//! original two recognizer passes rather than unified into one regex (spec
//! §4.E, resolved in SPEC_FULL.md §10.7): `block [mode] [name]` and the
//! standalone `mode name` shorthand.

use super::super::state::LexState;
use super::support::classes_then_sub;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_FULL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^block(?=[ \t\n]|$)(?:[ \t]+(?P<mode>append|prepend|replace))?(?:[ \t]+(?P<name>[A-Za-z_][A-Za-z0-9_\-]*))?")
        .unwrap()
});

static BLOCK_SHORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<mode>append|prepend|replace)[ \t]+(?P<name>[A-Za-z_][A-Za-z0-9_\-]*)").unwrap()
});

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();

    if let Some(m) = state.cursor.try_match(&BLOCK_FULL) {
        let mode = m.get("mode");
        let name = m.get("name");
        state.cursor.consume_match(&m)?;
        let mut tokens = vec![Token::new(TokenKind::Block { mode, name }, line, offset)];
        tokens.extend(classes_then_sub(state)?);
        return Ok(tokens);
    }

    if let Some(m) = state.cursor.try_match(&BLOCK_SHORT) {
        let mode = m.get("mode");
        let name = m.get("name");
        state.cursor.consume_match(&m)?;
        let mut tokens = vec![Token::new(TokenKind::Block { mode, name }, line, offset)];
        tokens.extend(classes_then_sub(state)?);
        return Ok(tokens);
    }

    Ok(vec![])
}
