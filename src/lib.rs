//! A lexer (tokenizer) for a Jade/Pug-style indentation-sensitive template
//! language.
//!
//! The entry point is [`lex::Lexer`], a pull-based `Iterator<Item =
//! Result<Token, LexError>>` over a source document. See `SPEC_FULL.md` for
//! the full design.

pub mod lex;

pub use lex::{dump, IndentStyle, LexError, LexErrorKind, Lexer, LexerOptions, Token, TokenKind};
