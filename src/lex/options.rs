//! Constructor options for the lexer (spec §6).
//!
//! Kept as a plain struct with a `Default` impl rather than the teacher's
//! `lex-config` TOML-loading `Loader` (`lex-config/src/lib.rs`): file I/O is
//! out of scope for this crate (spec §1), and there is no CLI surface here
//! that needs layered file-plus-override configuration. See SPEC_FULL.md
//! §10.3.

/// Which whitespace character a document's indentation is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tab,
    Space,
}

/// Options threaded into a [`crate::lex::lexing::Lexer`] at construction time.
///
/// `indent_style` / `indent_width` pin the indentation convention up front
/// instead of leaving it to be auto-detected from the first indented line
/// (spec §4.C step 2). `encoding` is carried through for API parity with the
/// original design but the lexer always operates on `char` (Unicode scalar
/// value) positions regardless of its value.
#[derive(Debug, Clone)]
pub struct LexerOptions {
    pub indent_style: Option<IndentStyle>,
    pub indent_width: Option<usize>,
    pub encoding: String,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            indent_style: None,
            indent_width: None,
            encoding: "UTF-8".to_string(),
        }
    }
}
