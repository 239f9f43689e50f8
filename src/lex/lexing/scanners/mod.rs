//! The scanner suite (spec §4.E) and the fixed order in which the
//! dispatcher tries them (spec §4.D).

mod assignment;
mod attributes;
mod block;
mod case;
mod classes;
mod comment;
mod conditional;
mod do_while;
mod doctype;
mod each;
mod expression;
mod filter;
mod id;
mod import;
mod markup;
mod mixin;
mod newline;
mod tag;
mod text;
mod text_line;
mod when;

pub mod support;

use super::indent_tracker;
use super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::token::Token;

pub type ScanFn = fn(&mut LexState) -> Result<Vec<Token>, LexError>;

/// The dispatcher's top-level scanner order, exactly as spec §4.D lists it.
/// Earlier entries shadow later ones: the first scanner to yield any tokens
/// wins, even if a later scanner in the list would also have matched (the
/// Open Question resolution in SPEC_FULL.md §10.7).
pub fn top_level_scanners() -> Vec<(&'static str, ScanFn)> {
    vec![
        ("newLine", newline::scan),
        ("indent", indent_tracker::scan),
        ("import", import::scan),
        ("block", block::scan),
        ("conditional", conditional::scan),
        ("each", each::scan),
        ("case", case::scan),
        ("when", when::scan),
        ("do", do_while::scan_do),
        ("while", do_while::scan_while),
        ("mixin", mixin::scan_mixin),
        ("mixinCall", mixin::scan_mixin_call),
        ("doctype", doctype::scan),
        ("tag", tag::scan),
        ("classes", classes::scan),
        ("id", id::scan),
        ("attributes", attributes::scan),
        ("assignment", assignment::scan),
        ("comment", comment::scan),
        ("filter", filter::scan),
        ("expression", expression::scan),
        ("markup", markup::scan),
        ("textLine", text_line::scan),
        ("text", text::scan),
    ]
}
