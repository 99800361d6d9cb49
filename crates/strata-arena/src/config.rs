//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for an [`Arena`](crate::Arena).
///
/// Controls the initial capacity and whether the buffer may be grown
/// through [`Arena::reserve`](crate::Arena::reserve). Validated by
/// [`Arena::with_config`](crate::Arena::with_config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Initial buffer size in bytes.
    ///
    /// Default: 4096. Zero is valid and produces an arena without a buffer.
    pub capacity: usize,

    /// Whether [`Arena::reserve`](crate::Arena::reserve) may reallocate the
    /// buffer when it runs out of space.
    ///
    /// Default: `false`. Fixed arenas treat exhaustion as an error.
    pub growable: bool,

    /// Upper bound for growth in bytes. Ignored for fixed arenas.
    ///
    /// Default: 64 MiB. Must be at least `capacity` when `growable` is set.
    pub max_capacity: usize,
}

impl ArenaConfig {
    /// Default initial capacity: 4 KiB.
    pub const DEFAULT_CAPACITY: usize = 4 * 1024;

    /// Default growth ceiling: 64 MiB.
    pub const DEFAULT_MAX_CAPACITY: usize = 64 * 1024 * 1024;

    /// Create a fixed-capacity config.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            growable: false,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Create a growable config that may expand up to `max_capacity` bytes.
    pub fn growable(capacity: usize, max_capacity: usize) -> Self {
        Self {
            capacity,
            growable: true,
            max_capacity,
        }
    }

    /// Check the config for internal consistency.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.growable && self.max_capacity < self.capacity {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "max_capacity ({}) is smaller than capacity ({})",
                    self.max_capacity, self.capacity
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
