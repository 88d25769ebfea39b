//! User-facing activity identifiers.
//!
//! # Responsibility
//! - Classify raw identifier input once, at the boundary.
//!
//! # Invariants
//! - All-digit input is a 1-based positional index, never a name.
//! - Empty (or whitespace-only) input is rejected before any resolution.

use crate::list::activity_list::ListError;
use once_cell::sync::Lazy;
use regex::Regex;

static INDEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid index regex"));

/// Resolved identifier kind for remove/mark/edit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// 1-based position in the stored sequence.
    ByIndex(usize),
    /// Exact description match.
    ByName(String),
}

impl Identifier {
    /// Classifies raw input as an index or a name.
    ///
    /// The digit test happens here and nowhere else; operations downstream
    /// only ever see the classified variant.
    ///
    /// # Errors
    /// - [`ListError::EmptyIdentifier`] when the trimmed input is empty.
    pub fn parse(raw: &str) -> Result<Self, ListError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ListError::EmptyIdentifier);
        }
        if INDEX_RE.is_match(trimmed) {
            // Oversized digit strings are still index lookups; saturate so
            // resolution reports out-of-range instead of a parse failure.
            let index = trimmed.parse::<usize>().unwrap_or(usize::MAX);
            return Ok(Self::ByIndex(index));
        }
        Ok(Self::ByName(trimmed.to_string()))
    }
}
