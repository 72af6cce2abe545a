#![deny(missing_docs)]

//! # Text Patching
//!
//! Inserts literal text blocks immediately after literal anchor fragments
//! in an otherwise opaque document. The document is never parsed; the
//! anchor is matched verbatim, whitespace included.

use crate::error::AppResult;
use regex::{Captures, Regex};

/// Result of applying a single insertion to a document.
#[derive(Debug)]
pub struct PatchOutcome {
    /// The document text after substitution.
    pub text: String,
    /// How many anchor occurrences received the block.
    pub matches: usize,
}

/// Inserts `block` after every occurrence of the literal `anchor`.
///
/// The anchor literal is escaped and wrapped in a named capture group, so
/// the replacement re-emits the matched text unchanged, followed by a blank
/// line and the block. Substitution is global: zero matches leaves the
/// document untouched (and is not an error), and if the anchor occurs more
/// than once every occurrence gets the block.
pub fn insert_after(source: &str, anchor: &str, block: &str) -> AppResult<PatchOutcome> {
    let pattern = Regex::new(&format!("(?P<anchor>{})", regex::escape(anchor)))?;

    let mut matches = 0usize;
    let text = pattern
        .replace_all(source, |caps: &Captures| {
            matches += 1;
            format!("{}\n\n{}", &caps["anchor"], block)
        })
        .into_owned();

    Ok(PatchOutcome { text, matches })
}
