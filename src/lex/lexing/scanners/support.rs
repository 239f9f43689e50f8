//! Shared tail helpers used by several scanners (spec §4.E).
//!
//! `classes_then_sub` is the "+classes+sub" tail shared by `tag`, `id`,
//! `mixin`, `mixinCall` and `attributes`. `scan_sub` (".text-block" and
//! ":expansion") and `scan_text_block` (the nested raw-text reader used by
//! text blocks, comments and filters) are shared in turn by everything that
//! calls `scan_sub`.

use super::super::bracket_reader::read_bracketed;
use super::super::indent_tracker::is_blank_ahead;
use super::super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

pub const IDENT_PATTERN: &str = r"[A-Za-z_][A-Za-z0-9_\-]*";

static CLASS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\.({})", IDENT_PATTERN)).unwrap());

pub fn skip_spaces(state: &mut LexState) {
    let _ = state.cursor.read(|c| c == ' ' || c == '\t');
}

pub fn skip_spaces_and_newlines(state: &mut LexState) {
    let _ = state.cursor.read(|c| c == ' ' || c == '\t' || c == '\n');
}

/// `classes (repeatable) -> class + classes + sub`, plus an unconditional
/// tail call into [`scan_sub`] regardless of whether any class matched.
pub fn classes_then_sub(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    loop {
        let line = state.cursor.line();
        let offset = state.cursor.offset();
        match state.cursor.try_match(&CLASS_REGEX) {
            Some(m) => {
                let name = m.full.trim_start_matches('.').to_string();
                state.cursor.consume_match(&m)?;
                tokens.push(Token::new(TokenKind::Class { name }, line, offset));
            }
            None => break,
        }
    }
    tokens.extend(scan_sub(state)?);
    Ok(tokens)
}

/// `sub: optionally a '.'-introduced text block, then optionally a
/// ':'-introduced expansion`.
pub fn scan_sub(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    if state.cursor.peek(1) == "." {
        let _ = state.cursor.consume(1);
        tokens.extend(scan_text_block(state)?);
    }

    if state.cursor.peek(1) == ":" {
        let line = state.cursor.line();
        let offset = state.cursor.offset();
        let _ = state.cursor.consume(1);
        let spaces = state.cursor.read(|c| c == ' ' || c == '\t');
        tokens.push(Token::new(
            TokenKind::Expansion {
                with_space: !spaces.is_empty(),
            },
            line,
            offset,
        ));
    }

    Ok(tokens)
}

/// Reads a block of raw text more indented than the level in effect when
/// the block started, emitting Text/NewLine/Indent/Outdent tokens relative
/// to that base level, and stops (without consuming) once a line's
/// indentation drops back to or below it. Also used directly by comments
/// and filters, which share this same "verbatim body" shape.
pub fn scan_text_block(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    let base_level = state.level;
    let mut block_level = base_level;
    let mut tokens = Vec::new();

    loop {
        if state.cursor.is_at_end() {
            let line = state.cursor.line();
            let offset = state.cursor.offset();
            while block_level > base_level {
                tokens.push(Token::new(TokenKind::Outdent, line, offset));
                block_level -= 1;
            }
            break;
        }

        if state.cursor.offset() != 0 {
            // Mid-line content from the line that introduced the block
            // (e.g. `p. inline text`).
            let line = state.cursor.line();
            let offset = state.cursor.offset();
            let text = state.cursor.read(|c| c != '\n');
            let trimmed = text.trim().to_string();
            if !trimmed.is_empty() {
                tokens.push(Token::new(TokenKind::Text { value: trimmed }, line, offset));
            }
            if state.cursor.peek(1) == "\n" {
                let nl_line = state.cursor.line();
                let nl_offset = state.cursor.offset();
                let _ = state.cursor.consume(1);
                tokens.push(Token::new(TokenKind::NewLine, nl_line, nl_offset));
            }
            continue;
        }

        let line = state.cursor.line();
        let ws = state
            .cursor
            .try_match(&WS_REGEX)
            .map(|m| m.full)
            .unwrap_or_default();
        let ws_len = ws.chars().count();

        if is_blank_ahead(&state.cursor, ws_len) {
            if ws_len > 0 {
                state.cursor.consume(ws_len)?;
            }
            if state.cursor.peek(1) == "\n" {
                let nl_line = state.cursor.line();
                let nl_offset = state.cursor.offset();
                let _ = state.cursor.consume(1);
                tokens.push(Token::new(TokenKind::NewLine, nl_line, nl_offset));
            }
            continue;
        }

        let width = state.width.unwrap_or_else(|| ws_len.max(1)).max(1);
        let this_level = ((ws_len as f64) / (width as f64)).round() as usize;

        if this_level <= base_level {
            let line2 = state.cursor.line();
            let offset2 = state.cursor.offset();
            while block_level > base_level {
                tokens.push(Token::new(TokenKind::Outdent, line2, offset2));
                block_level -= 1;
            }
            break;
        }

        state.cursor.consume(ws_len)?;
        match this_level.cmp(&block_level) {
            std::cmp::Ordering::Greater => {
                for _ in 0..(this_level - block_level) {
                    tokens.push(Token::new(TokenKind::Indent, line, ws_len));
                }
            }
            std::cmp::Ordering::Less => {
                for _ in 0..(block_level - this_level) {
                    tokens.push(Token::new(TokenKind::Outdent, line, ws_len));
                }
            }
            std::cmp::Ordering::Equal => {}
        }
        block_level = this_level;

        let content_offset = state.cursor.offset();
        let content = state.cursor.read(|c| c != '\n');
        tokens.push(Token::new(
            TokenKind::Text {
                value: content.trim_end().to_string(),
            },
            line,
            content_offset,
        ));
        if state.cursor.peek(1) == "\n" {
            let nl_line = state.cursor.line();
            let nl_offset = state.cursor.offset();
            let _ = state.cursor.consume(1);
            tokens.push(Token::new(TokenKind::NewLine, nl_line, nl_offset));
        }
    }

    state.level = base_level;
    Ok(tokens)
}

static WS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*").unwrap());

/// `Read the subject`: a parenthesized expression via the bracket reader, or
/// everything up to end of line, per spec §4.E's control-statement recipe.
/// Returns `None` when there is nothing before `:`/newline/end of input.
pub fn read_subject(state: &mut LexState) -> Result<Option<String>, LexError> {
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    if state.cursor.peek(1) == "(" {
        let _ = state.cursor.consume(1);
        let subject = read_bracketed(&mut state.cursor, &[]);
        if state.cursor.peek(1) != ")" {
            return Err(LexError::unclosed_control_subject(line, offset));
        }
        let _ = state.cursor.consume(1);
        Ok(if subject.is_empty() { None } else { Some(subject) })
    } else {
        let next = state.cursor.peek(1);
        if next.is_empty() || next == ":" || next == "\n" {
            return Ok(None);
        }
        let text = state.cursor.read(|c| c != '\n');
        let trimmed = text.trim().to_string();
        Ok(if trimmed.is_empty() { None } else { Some(trimmed) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::options::LexerOptions;

    fn state_for(src: &str) -> LexState {
        LexState::new(src.to_string(), &LexerOptions::default())
    }

    #[test]
    fn classes_then_sub_collects_repeated_classes() {
        let mut state = state_for(".a.b rest");
        let tokens = classes_then_sub(&mut state).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Class { name: "a".into() }, 1, 0),
                Token::new(TokenKind::Class { name: "b".into() }, 1, 2),
            ]
        );
    }

    #[test]
    fn text_block_closes_open_levels_at_end_of_input() {
        let mut state = state_for("  deeper\n    deepest\n");
        state.width = Some(2);
        let tokens = scan_text_block(&mut state).unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.type_name()).collect();
        assert_eq!(
            kinds,
            vec![
                "indent", "text", "newLine", "indent", "text", "newLine", "outdent", "outdent"
            ]
        );
        assert_eq!(state.level, 0);
    }

    #[test]
    fn text_block_stops_before_lower_indent() {
        let mut state = state_for("  line one\n  line two\nback");
        state.level = 1;
        state.width = Some(2);
        let tokens = scan_text_block(&mut state).unwrap();
        assert!(tokens
            .iter()
            .any(|t| matches!(&t.kind, TokenKind::Text{ value } if value == "line one")));
        assert!(tokens
            .iter()
            .any(|t| matches!(&t.kind, TokenKind::Text{ value } if value == "line two")));
        assert_eq!(state.cursor.peek(4), "back");
    }
}
