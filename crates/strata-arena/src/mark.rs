//! Arena checkpoints.
//!
//! A [`Mark`] records the bump offset together with the arena generation.
//! The generation allows O(1) staleness checks: a mark taken before a
//! reset or destroy no longer describes live memory and is rejected by
//! [`Arena::rewind`](crate::Arena::rewind).

use std::fmt;

/// A checkpoint of an arena's allocation offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Mark {
    /// Bump offset when the mark was taken.
    pub(crate) offset: usize,
    /// Arena generation when the mark was taken.
    pub(crate) generation: u64,
}

impl Mark {
    pub(crate) fn new(offset: usize, generation: u64) -> Self {
        Self { offset, generation }
    }

    /// The recorded offset in bytes.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The generation this mark belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mark(gen={}, off={})", self.generation, self.offset)
    }
}
