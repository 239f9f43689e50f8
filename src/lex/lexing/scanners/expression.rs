//! `expression`: `-` (a statement, no output) or `=`/`!=` (an interpolated,
//! escaped/unescaped output expression) (spec §4.E).
//!
//! `-` takes a full text block (a multi-line script body is legal); `=`/`!=`
//! takes a single line, since the expression itself can't span lines.

use super::super::state::LexState;
use super::support::scan_text_block;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static STATEMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-[ \t]*").unwrap());
static OUTPUT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<op>!=|=)[ \t]*").unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();

    if let Some(m) = state.cursor.try_match(&STATEMENT_REGEX) {
        state.cursor.consume_match(&m)?;
        let mut tokens = vec![Token::new(
            TokenKind::Expression {
                escaped: false,
                returns: false,
            },
            line,
            offset,
        )];
        tokens.extend(scan_text_block(state)?);
        return Ok(tokens);
    }

    if let Some(m) = state.cursor.try_match(&OUTPUT_REGEX) {
        let escaped = m.get("op").as_deref() != Some("!=");
        state.cursor.consume_match(&m)?;
        let mut tokens = vec![Token::new(
            TokenKind::Expression {
                escaped,
                returns: true,
            },
            line,
            offset,
        )];
        let text_offset = state.cursor.offset();
        let text_line = state.cursor.line();
        let value = state.cursor.read(|c| c != '\n');
        let trimmed = value.trim().to_string();
        if !trimmed.is_empty() {
            tokens.push(Token::new(
                TokenKind::Text { value: trimmed },
                text_line,
                text_offset,
            ));
        }
        return Ok(tokens);
    }

    Ok(vec![])
}
