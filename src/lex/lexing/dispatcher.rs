//! The dispatcher (spec §4.D): tries every scanner, in the fixed order spec
//! §4.E lists them, at the current cursor position and returns the first
//! non-empty result.

use super::scanners::{top_level_scanners, ScanFn};
use super::state::LexState;
use crate::lex::error::LexError;
use crate::lex::token::Token;

pub struct Dispatcher {
    scanners: Vec<(&'static str, ScanFn)>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            scanners: top_level_scanners(),
        }
    }

    /// One dispatch step: try every scanner in order; the first to yield a
    /// non-empty token vector wins and its output is returned. `Ok(None)`
    /// means nothing matched at this position.
    pub fn try_scanners(&self, state: &mut LexState) -> Result<Option<Vec<Token>>, LexError> {
        for (_, scan) in &self.scanners {
            let tokens = scan(state)?;
            if !tokens.is_empty() {
                return Ok(Some(tokens));
            }
        }
        Ok(None)
    }

    pub fn scanner_names(&self) -> Vec<&'static str> {
        self.scanners.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
