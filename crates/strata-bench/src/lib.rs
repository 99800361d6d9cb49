//! Benchmark corpora and arena sizing for Strata.
//!
//! Provides deterministic inputs for the criterion benches:
//!
//! - [`csv_line`]: one comma-separated record with `fields` fields
//! - [`corpus`]: `lines` newline-terminated records
//! - [`arena_for`]: an arena large enough to hold several copies of an input

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_arena::Arena;

const WORDS: [&str; 8] = [
    "arena", "bump", "frame", "mark", "slice", "view", "split", "join",
];

/// One record of `fields` comma-separated words, cycling through a fixed
/// vocabulary so the output is the same on every run.
pub fn csv_line(fields: usize) -> String {
    let mut line = String::new();
    for i in 0..fields {
        if i > 0 {
            line.push(',');
        }
        line.push_str(WORDS[i % WORDS.len()]);
    }
    line
}

/// `lines` records of 16 fields each, every one ending in a newline.
pub fn corpus(lines: usize) -> String {
    let record = csv_line(16);
    let mut text = String::with_capacity(lines * (record.len() + 1));
    for _ in 0..lines {
        text.push_str(&record);
        text.push('\n');
    }
    text
}

/// An arena with room for `copies` copies of `input` plus their terminators.
pub fn arena_for(input: &str, copies: usize) -> Arena {
    Arena::new((input.len() + 1) * copies)
}
