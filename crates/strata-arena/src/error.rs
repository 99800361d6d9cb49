//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The request does not fit in the remaining space.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still free before the request.
        remaining: usize,
        /// Total capacity of the arena.
        capacity: usize,
    },
    /// The arena was destroyed; it hands out no more memory.
    Destroyed,
    /// A [`Mark`](crate::Mark) taken before the last reset or destroy.
    StaleMark {
        /// The generation recorded in the mark.
        mark_generation: u64,
        /// The arena's current generation.
        generation: u64,
    },
    /// A [`Mark`](crate::Mark) that points past the current offset.
    InvalidMark {
        /// Offset recorded in the mark.
        mark_offset: usize,
        /// The arena's current offset.
        offset: usize,
    },
    /// [`Arena::reserve`](crate::Arena::reserve) on a fixed-capacity arena
    /// that lacks space.
    NotGrowable {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still free.
        remaining: usize,
    },
    /// Growth would exceed the configured ceiling.
    GrowthLimit {
        /// Capacity the request would need.
        needed: usize,
        /// Configured `max_capacity`.
        max_capacity: usize,
    },
    /// The [`ArenaConfig`](crate::ArenaConfig) is inconsistent.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, \
                     {remaining} of {capacity} bytes free"
                )
            }
            Self::Destroyed => write!(f, "arena has been destroyed"),
            Self::StaleMark {
                mark_generation,
                generation,
            } => {
                write!(
                    f,
                    "stale mark: generation {mark_generation}, arena generation {generation}"
                )
            }
            Self::InvalidMark {
                mark_offset,
                offset,
            } => {
                write!(
                    f,
                    "mark offset {mark_offset} is ahead of arena offset {offset}"
                )
            }
            Self::NotGrowable {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "fixed arena cannot grow: requested {requested} bytes, {remaining} free"
                )
            }
            Self::GrowthLimit {
                needed,
                max_capacity,
            } => {
                write!(
                    f,
                    "arena growth to {needed} bytes exceeds max_capacity {max_capacity}"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid arena config: {reason}"),
        }
    }
}

impl Error for ArenaError {}
