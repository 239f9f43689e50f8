//! `attributes`: a parenthesized, comma-separated attribute list (spec
//! §4.E). Each entry is `name`, `name=value`, `name!=value` (unescaped) or a
//! bare `value` (a spread/shorthand with no name) — the value itself is
//! read with the bracket-aware reader so nested calls and strings inside it
//! don't end the attribute early.

use super::super::bracket_reader::read_bracketed;
use super::super::state::LexState;
use super::support::{classes_then_sub, skip_spaces_and_newlines, IDENT_PATTERN};
use crate::lex::error::LexError;
use crate::lex::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static ATTR_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^(?:\.\.\.)?{}", IDENT_PATTERN)).unwrap());

pub fn scan(state: &mut LexState) -> Result<Vec<Token>, LexError> {
    if state.cursor.peek(1) != "(" {
        return Ok(vec![]);
    }
    let line = state.cursor.line();
    let offset = state.cursor.offset();
    let _ = state.cursor.consume(1);

    let mut tokens = vec![Token::new(TokenKind::AttributeStart, line, offset)];
    skip_spaces_and_newlines(state);

    loop {
        if state.cursor.is_at_end() {
            return Err(LexError::unclosed_attribute_block(line, offset));
        }
        if state.cursor.peek(1) == ")" {
            break;
        }

        let attr_line = state.cursor.line();
        let attr_offset = state.cursor.offset();

        let mut name = None;
        if let Some(m) = state.cursor.try_match(&ATTR_NAME_REGEX) {
            name = Some(m.full.clone());
            let _ = state.cursor.consume(m.char_len());
            skip_spaces_and_newlines(state);
        }

        let mut escaped = true;
        if state.cursor.peek(2) == "!=" {
            escaped = false;
            let _ = state.cursor.consume(1);
        }

        let value = if name.is_none() {
            Some(read_bracketed(&mut state.cursor, &[',']))
        } else if state.cursor.peek(1) == "=" {
            let _ = state.cursor.consume(1);
            skip_spaces_and_newlines(state);
            Some(read_bracketed(&mut state.cursor, &[',']))
        } else {
            None
        };

        tokens.push(Token::new(
            TokenKind::Attribute {
                name,
                value,
                escaped,
            },
            attr_line,
            attr_offset,
        ));

        skip_spaces_and_newlines(state);
        if state.cursor.peek(1) == "," {
            let _ = state.cursor.consume(1);
            skip_spaces_and_newlines(state);
            continue;
        }
        break;
    }

    if state.cursor.peek(1) != ")" {
        return Err(LexError::unclosed_attribute_block(line, offset));
    }
    let end_line = state.cursor.line();
    let end_offset = state.cursor.offset();
    let _ = state.cursor.consume(1);
    tokens.push(Token::new(TokenKind::AttributeEnd, end_line, end_offset));

    tokens.extend(classes_then_sub(state)?);
    Ok(tokens)
}
