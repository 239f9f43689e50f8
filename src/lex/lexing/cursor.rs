//! The input cursor (spec §4.A).
//!
//! Ported from the teacher's tokenization entry point
//! (`base_tokenization::tokenize` in
//! `lex-fmt-core/src/lex/lexers/base_tokenization.rs`) but, unlike `logos`,
//! this cursor is driven by hand: the dispatcher asks it to peek, match and
//! consume on demand rather than pulling a fixed token enum out of a derive
//! macro. `logos` is architecturally incompatible with the regex-dispatch
//! design spec §4 calls for, so it is not a dependency of this crate.
//!
//! Positions are tracked in `char`s (Unicode scalar values), per spec §3,
//! alongside a byte offset used only to slice the underlying `String` for
//! `regex` (which operates on `&str`).

use crate::lex::error::LexError;
use regex::Regex;

/// The result of a successful [`Cursor::try_match`], with capture groups
/// resolved into owned strings.
///
/// Kept as a return value instead of being stashed on the cursor (as the
/// `last_match` field the original design describes) per the Open Question
/// resolution in SPEC_FULL.md §10.7: this avoids the shared mutable state
/// hazard while carrying the same information.
#[derive(Debug, Clone)]
pub struct CursorMatch {
    pub full: String,
    groups: Vec<Option<String>>,
    names: Vec<Option<String>>,
}

impl CursorMatch {
    /// Look up a named capture group, treating an empty capture as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.names
            .iter()
            .position(|n| n.as_deref() == Some(key))
            .and_then(|idx| self.groups.get(idx).cloned().flatten())
            .filter(|s| !s.is_empty())
    }

    pub fn char_len(&self) -> usize {
        self.full.chars().count()
    }
}

/// A forward-only view over the normalized source, exposing the peek /
/// consume / match primitives spec §4.A names.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    byte_pos: usize,
    length: usize,
    position: usize,
    line: usize,
    offset: usize,
}

impl Cursor {
    pub fn new(source: String) -> Self {
        let length = source.chars().count();
        Cursor {
            source,
            byte_pos: 0,
            length,
            position: 0,
            line: 1,
            offset: 0,
        }
    }

    fn remaining(&self) -> &str {
        &self.source[self.byte_pos..]
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.length
    }

    /// Look at the next `n` characters without consuming them. Returns fewer
    /// than `n` characters at end of input.
    pub fn peek(&self, n: usize) -> String {
        self.remaining().chars().take(n).collect()
    }

    /// Advance the cursor by `n` characters, updating line/offset bookkeeping.
    /// `n` must be supplied explicitly; there is no "consume the last peek"
    /// mode, since match results are threaded as return values rather than
    /// mutable cursor state (see [`CursorMatch`]).
    pub fn consume(&mut self, n: usize) -> Result<(), LexError> {
        let mut consumed_bytes = 0;
        let mut chars_seen = 0;
        for ch in self.remaining().chars() {
            if chars_seen >= n {
                break;
            }
            consumed_bytes += ch.len_utf8();
            chars_seen += 1;
            if ch == '\n' {
                self.line += 1;
                self.offset = 0;
            } else {
                self.offset += 1;
            }
        }
        self.byte_pos += consumed_bytes;
        self.position += chars_seen;
        Ok(())
    }

    /// Anchored match: `pattern` must match starting exactly at the cursor's
    /// current position (patterns are expected to begin with `^`).
    pub fn try_match(&self, pattern: &Regex) -> Option<CursorMatch> {
        let hay = self.remaining();
        let caps = pattern.captures(hay)?;
        let m0 = caps.get(0)?;
        if m0.start() != 0 {
            return None;
        }
        let full = m0.as_str().to_string();
        let mut groups = Vec::with_capacity(caps.len());
        for i in 0..caps.len() {
            groups.push(caps.get(i).map(|m| m.as_str().to_string()));
        }
        let names: Vec<Option<String>> = pattern
            .capture_names()
            .map(|n| n.map(|s| s.to_string()))
            .collect();
        Some(CursorMatch {
            full,
            groups,
            names,
        })
    }

    /// Consume the span of a prior [`try_match`] result.
    ///
    /// Trailing newlines in the match are left unconsumed so the `newLine`
    /// scanner remains the single place that yields `NewLine` tokens (a
    /// pattern like `each ... in ...\n` must not silently swallow the line
    /// break the dispatcher still needs to see).
    pub fn consume_match(&mut self, m: &CursorMatch) -> Result<(), LexError> {
        let trailing_newlines = m.full.chars().rev().take_while(|&c| c == '\n').count();
        let total = m.char_len();
        self.consume(total - trailing_newlines)
    }

    /// Consume characters while `predicate` holds for the single next
    /// character, returning everything consumed.
    pub fn read<F: Fn(char) -> bool>(&mut self, predicate: F) -> String {
        let mut acc = String::new();
        loop {
            let next = match self.remaining().chars().next() {
                Some(c) => c,
                None => break,
            };
            if !predicate(next) {
                break;
            }
            let _ = self.consume(1);
            acc.push(next);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let c = Cursor::new("abc".to_string());
        assert_eq!(c.peek(2), "ab");
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn consume_tracks_line_and_offset() {
        let mut c = Cursor::new("ab\ncd".to_string());
        c.consume(3).unwrap();
        assert_eq!(c.line(), 2);
        assert_eq!(c.offset(), 0);
        c.consume(2).unwrap();
        assert_eq!(c.offset(), 2);
        assert!(c.is_at_end());
    }

    #[test]
    fn try_match_is_anchored() {
        let c = Cursor::new("  abc".to_string());
        let re = Regex::new(r"^[a-z]+").unwrap();
        assert!(c.try_match(&re).is_none());
    }

    #[test]
    fn consume_match_keeps_trailing_newlines() {
        let mut c = Cursor::new("extends foo\nnext".to_string());
        let re = Regex::new(r"^extends foo\n").unwrap();
        let m = c.try_match(&re).unwrap();
        c.consume_match(&m).unwrap();
        assert_eq!(c.line(), 1);
        assert_eq!(c.peek(1), "\n");
    }

    #[test]
    fn read_collects_while_predicate_holds() {
        let mut c = Cursor::new("   x".to_string());
        let spaces = c.read(|ch| ch == ' ');
        assert_eq!(spaces, "   ");
        assert_eq!(c.peek(1), "x");
    }
}
