//! Shared mutable state threaded through every scanner call.
//!
//! Bundles the cursor with the indent tracker's running level/style/width —
//! the scanners that call into `scan_sub`/`scan_text_block` need to read and
//! restore `level`, so it lives alongside the cursor rather than behind a
//! second handle.

use super::cursor::Cursor;
use crate::lex::options::{IndentStyle, LexerOptions};

pub struct LexState {
    pub cursor: Cursor,
    pub style: Option<IndentStyle>,
    pub width: Option<usize>,
    pub level: usize,
}

impl LexState {
    pub fn new(normalized_source: String, options: &LexerOptions) -> Self {
        LexState {
            cursor: Cursor::new(normalized_source),
            style: options.indent_style,
            width: options.indent_width,
            level: 0,
        }
    }
}
