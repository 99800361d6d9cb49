//! Test fixtures shared across the Strata crates.
//!
//! Provides arena pairs sized for typical tests, helpers that turn string
//! lists into owned `String`s for assertions, and temporary text files
//! (see [`fixtures`]) for the file-ingestion paths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use strata_arena::Arena;
use strata_text::{Str, StrList};

pub use fixtures::{numbered_lines, TextFile, SAMPLE_TEXT};

/// Capacity used by most string tests for both output and scratch.
pub const TEST_CAPACITY: usize = 4 * 1024;

/// An output arena and a scratchpad, both of `capacity` bytes.
pub fn arenas(capacity: usize) -> (Arena, Arena) {
    (Arena::new(capacity), Arena::new(capacity))
}

/// Lossy UTF-8 copies of every element, for comparing against literals.
pub fn texts(list: &StrList<'_>) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Lossy UTF-8 copy of one string.
pub fn text(s: Str<'_>) -> String {
    s.to_string()
}
