//! `classes`: the top-level dispatcher entry for a line that opens with one
//! or more `.name` classes and no preceding tag (spec §4.E). Gated on seeing
//! at least one class, then delegates to the shared
//! [`super::support::classes_then_sub`] tail used by `tag`/`id`/`mixin`/
//! `mixinCall`/`attributes`.

use super::super::state::LexState;
use super::support::{classes_then_sub, IDENT_PATTERN};
use crate::lex::error::LexError;
use crate::lex::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_PEEK: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\.{}", IDENT_PATTERN)).unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    if state.cursor.try_match(&CLASS_PEEK).is_none() {
        return Ok(vec![]);
    }
    classes_then_sub(state)
}
