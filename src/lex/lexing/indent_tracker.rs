//! The indent tracker (spec §4.C).
//!
//! Grounded on the teacher's `SemanticIndentationMapper` in
//! `lex-parser/src/lex/lexing/transformations/semantic_indentation.rs`: both
//! track a running level and emit a delta's worth of Indent/Outdent tokens
//! per line, and both treat a blank line (whitespace followed immediately by
//! a newline) as a no-op that neither indents nor dedents — the teacher's own
//! `test_blank_line_with_spaces_does_not_dedent` is the model for this
//! crate's equivalent test below.

use super::cursor::Cursor;
use super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::options::IndentStyle;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*").unwrap());

/// Runs at the start of a line (`cursor.offset() == 0`) only; returns an
/// empty vector everywhere else so the dispatcher moves on to other
/// scanners.
pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    if state.cursor.offset() != 0 {
        return Ok(vec![]);
    }
    let line = state.cursor.line();
    let offset = state.cursor.offset();

    let ws = state
        .cursor
        .try_match(&LEADING_WS)
        .map(|m| m.full)
        .unwrap_or_default();
    let ws_len = ws.chars().count();

    if is_blank_ahead(&state.cursor, ws_len) {
        // Blank line: discard the indentation, leave the level untouched,
        // and let the newLine scanner yield the line break.
        if ws_len > 0 {
            state.cursor.consume(ws_len)?;
        }
        return Ok(vec![]);
    }

    if ws_len == 0 {
        if state.level > 0 {
            let n = state.level;
            state.level = 0;
            return Ok((0..n)
                .map(|_| Token::new(TokenKind::Outdent, line, offset))
                .collect());
        }
        return Ok(vec![]);
    }

    state.cursor.consume(ws_len)?;

    let has_tab = ws.contains('\t');
    let has_space = ws.contains(' ');
    if has_tab && has_space {
        return Err(LexError::mixed_within_line(line, offset));
    }
    let this_style = if has_tab {
        IndentStyle::Tab
    } else {
        IndentStyle::Space
    };
    match state.style {
        Some(existing) if existing != this_style => {
            return Err(LexError::mixed_across_lines(line, offset));
        }
        None => state.style = Some(this_style),
        _ => {}
    }

    if state.width.is_none() {
        state.width = Some(ws_len);
    }
    let width = state.width.unwrap().max(1);
    let new_level = ((ws_len as f64) / (width as f64)).round() as usize;

    if new_level > state.level + 1 {
        return Err(LexError::over_indent(line, offset));
    }

    let delta = new_level as i64 - state.level as i64;
    state.level = new_level;

    if delta == 0 {
        Ok(vec![])
    } else if delta > 0 {
        Ok((0..delta)
            .map(|_| Token::new(TokenKind::Indent, line, offset))
            .collect())
    } else {
        Ok((0..-delta)
            .map(|_| Token::new(TokenKind::Outdent, line, offset))
            .collect())
    }
}

/// True if the `ws_len` characters of leading whitespace already peeked are
/// immediately followed by a newline (or end of input).
pub(super) fn is_blank_ahead(cursor: &Cursor, ws_len: usize) -> bool {
    let lookahead = cursor.peek(ws_len + 1);
    matches!(lookahead.chars().nth(ws_len), Some('\n') | None)
}
