//! `import`: `extends`/`include`, with an optional `:filter` suffix on
//! `include` (spec §4.E).

use super::super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<kind>extends|include)(:(?P<filter>[A-Za-z_][A-Za-z0-9_\-]*))?[ \t]+(?P<path>[^\n]*)")
        .unwrap()
});

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let m = match state.cursor.try_match(&IMPORT_REGEX) {
        Some(m) => m,
        None => return Ok(vec![]),
    };
    let import_type = m.get("kind").unwrap();
    let filter = m.get("filter");
    let path = m.get("path").unwrap_or_default().trim().to_string();
    state.cursor.consume_match(&m)?;
    Ok(vec![Token::new(
        TokenKind::Import {
            import_type,
            filter,
            path,
        },
        line,
        offset,
    )])
}
