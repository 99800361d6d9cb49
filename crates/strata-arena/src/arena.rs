//! The bump arena.
//!
//! An [`Arena`] is one contiguous, zero-initialised byte buffer with a bump
//! offset. Regions are handed out in order and never freed individually;
//! the whole arena is reclaimed at once by [`Arena::reset`] or released by
//! [`Arena::destroy`].

use std::fmt;
use std::ptr::NonNull;

use log::debug;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::frame::Frame;
use crate::mark::Mark;
use crate::raw::BumpBuffer;

/// A fixed-capacity (or explicitly growable) bump allocator over bytes.
///
/// Allocation takes `&self`, so any number of regions may be alive at once.
/// Each region borrows the arena; [`reset`](Self::reset),
/// [`rewind`](Self::rewind), [`reserve`](Self::reserve) and
/// [`destroy`](Self::destroy) take `&mut self` and therefore cannot run
/// while a region is still in use.
///
/// # Invariants
///
/// - `0 <= offset() <= capacity()`
/// - a buffer exists iff `capacity() > 0`
/// - `generation()` increases on every reset and destroy
pub struct Arena {
    /// Backing storage and bump cursor. `None` when the capacity is zero.
    buffer: Option<BumpBuffer>,
    /// Bumped whenever every outstanding mark becomes meaningless.
    generation: u64,
    growable: bool,
    max_capacity: usize,
    destroyed: bool,
}

impl Arena {
    /// Create an arena with `capacity` bytes.
    ///
    /// A capacity of zero yields a valid, empty arena without a buffer.
    pub fn new(capacity: usize) -> Self {
        Self::from_config(&ArenaConfig::new(capacity))
    }

    /// Create an arena from a validated [`ArenaConfig`].
    pub fn with_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    fn from_config(config: &ArenaConfig) -> Self {
        Self {
            buffer: BumpBuffer::zeroed(config.capacity),
            generation: 0,
            growable: config.growable,
            max_capacity: config.max_capacity,
            destroyed: false,
        }
    }

    /// Allocate `size` zero-filled bytes.
    ///
    /// Returns [`ArenaError::CapacityExceeded`] if the request does not fit;
    /// the offset is left untouched in that case. A zero-sized request
    /// always succeeds on a live arena and does not move the offset.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc(&self, size: usize) -> Result<&mut [u8], ArenaError> {
        if self.destroyed {
            return Err(ArenaError::Destroyed);
        }
        if size == 0 {
            return Ok(&mut []);
        }
        self.buffer
            .as_ref()
            .and_then(|buffer| buffer.bump(size))
            .ok_or_else(|| ArenaError::CapacityExceeded {
                requested: size,
                remaining: self.remaining(),
                capacity: self.capacity(),
            })
    }

    /// Allocate a copy of `bytes`.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_copy(&self, bytes: &[u8]) -> Result<&mut [u8], ArenaError> {
        let region = self.alloc(bytes.len())?;
        region.copy_from_slice(bytes);
        Ok(region)
    }

    /// Rewind the offset to zero without freeing or clearing the buffer.
    ///
    /// All earlier regions and marks become invalid.
    pub fn reset(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.set_cursor(0);
        }
        self.generation += 1;
    }

    /// Release the buffer and zero the offset and capacity.
    ///
    /// Every later [`alloc`](Self::alloc) returns [`ArenaError::Destroyed`].
    pub fn destroy(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            debug!("destroying arena of {} bytes", buffer.len());
        }
        self.generation += 1;
        self.destroyed = true;
    }

    /// Record the current offset.
    pub fn mark(&self) -> Mark {
        Mark::new(self.offset(), self.generation)
    }

    /// Return the offset to a previously taken [`Mark`].
    ///
    /// Everything allocated after the mark is released. Marks from an
    /// earlier generation, or ahead of the current offset, are rejected.
    pub fn rewind(&mut self, mark: Mark) -> Result<(), ArenaError> {
        if mark.generation != self.generation {
            return Err(ArenaError::StaleMark {
                mark_generation: mark.generation,
                generation: self.generation,
            });
        }
        let offset = self.offset();
        if mark.offset > offset {
            return Err(ArenaError::InvalidMark {
                mark_offset: mark.offset,
                offset,
            });
        }
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.set_cursor(mark.offset);
        }
        Ok(())
    }

    /// Open a scratch [`Frame`] that rewinds to the current offset on drop.
    pub fn frame(&mut self) -> Frame<'_> {
        Frame::new(self)
    }

    /// Make sure at least `additional` bytes are free, growing if allowed.
    ///
    /// Growth reallocates the buffer (at least doubling it, capped at
    /// `max_capacity`) and keeps the bytes below the offset. Because this
    /// takes `&mut self`, no region from the old buffer can outlive it.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArenaError> {
        if self.destroyed {
            return Err(ArenaError::Destroyed);
        }
        let remaining = self.remaining();
        if additional <= remaining {
            return Ok(());
        }
        if !self.growable {
            return Err(ArenaError::NotGrowable {
                requested: additional,
                remaining,
            });
        }
        let needed = self
            .offset()
            .checked_add(additional)
            .filter(|&needed| needed <= self.max_capacity)
            .ok_or(ArenaError::GrowthLimit {
                needed: self.offset().saturating_add(additional),
                max_capacity: self.max_capacity,
            })?;
        let new_capacity = self
            .capacity()
            .saturating_mul(2)
            .max(needed)
            .min(self.max_capacity);
        debug!(
            "growing arena from {} to {} bytes",
            self.capacity(),
            new_capacity
        );
        match self.buffer.as_mut() {
            Some(buffer) => buffer.grow(new_capacity),
            None => self.buffer = BumpBuffer::zeroed(new_capacity),
        }
        Ok(())
    }

    /// Current bump offset in bytes.
    pub fn offset(&self) -> usize {
        self.buffer.as_ref().map_or(0, BumpBuffer::cursor)
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, BumpBuffer::len)
    }

    /// Bytes still available for allocation.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.offset()
    }

    /// Number of resets and destroys so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Whether [`reserve`](Self::reserve) may grow this arena.
    pub fn is_growable(&self) -> bool {
        self.growable
    }

    /// Start of the backing buffer, or `None` without a buffer.
    ///
    /// Identifies the buffer; it is not meant to be dereferenced.
    pub fn base_ptr(&self) -> Option<NonNull<u8>> {
        self.buffer.as_ref().map(BumpBuffer::as_non_null)
    }

    /// Move the offset back to `mark` if it still describes live memory.
    /// Used by [`Frame`] on drop.
    pub(crate) fn restore(&mut self, mark: Mark) {
        if mark.generation != self.generation {
            return;
        }
        if let Some(buffer) = self.buffer.as_mut() {
            if mark.offset <= buffer.cursor() {
                buffer.set_cursor(mark.offset);
            }
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::from_config(&ArenaConfig::default())
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("offset", &self.offset())
            .field("capacity", &self.capacity())
            .field("generation", &self.generation)
            .field("growable", &self.growable)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_zero_capacity_has_no_buffer() {
        let arena = Arena::new(0);
        assert_eq!(arena.offset(), 0);
        assert_eq!(arena.capacity(), 0);
        assert!(arena.base_ptr().is_none());
    }

    #[test]
    fn init_allocates_buffer() {
        let arena = Arena::new(1024);
        assert_eq!(arena.offset(), 0);
        assert_eq!(arena.capacity(), 1024);
        assert!(arena.base_ptr().is_some());
    }

    #[test]
    fn zero_alloc_does_not_move_offset() {
        let arena = Arena::new(1024);
        assert!(arena.alloc(0).unwrap().is_empty());
        assert_eq!(arena.offset(), 0);

        let empty = Arena::new(0);
        assert!(empty.alloc(0).unwrap().is_empty());
    }

    #[test]
    fn sequential_allocs_are_adjacent_and_disjoint() {
        let arena = Arena::new(1024);
        let base = arena.base_ptr().unwrap().as_ptr() as usize;
        let mut regions = Vec::new();
        for i in 0..4 {
            let region = arena.alloc(32).unwrap();
            assert_eq!(arena.offset(), (i + 1) * 32);
            assert_eq!(region.as_ptr() as usize, base + i * 32);
            regions.push(region);
        }
        for (i, region) in regions.iter_mut().enumerate() {
            region.fill(i as u8 + 1);
        }
        regions[2].fill(0xFF);
        assert!(regions[1].iter().all(|&b| b == 2));
        assert!(regions[3].iter().all(|&b| b == 4));
    }

    #[test]
    fn alloc_beyond_capacity_fails_without_moving_offset() {
        let arena = Arena::new(64);
        arena.alloc(60).unwrap();
        let err = arena.alloc(5).unwrap_err();
        assert_eq!(
            err,
            ArenaError::CapacityExceeded {
                requested: 5,
                remaining: 4,
                capacity: 64,
            }
        );
        assert_eq!(arena.offset(), 60);
        assert!(arena.alloc(4).is_ok());
    }

    #[test]
    fn alloc_on_empty_arena_fails() {
        let arena = Arena::new(0);
        assert!(matches!(
            arena.alloc(1),
            Err(ArenaError::CapacityExceeded { capacity: 0, .. })
        ));
    }

    #[test]
    fn alloc_is_zeroed_after_reset() {
        let mut arena = Arena::new(64);
        arena.alloc(64).unwrap().fill(42);
        arena.reset();
        assert!(arena.alloc(64).unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn reset_keeps_buffer_and_capacity() {
        let mut arena = Arena::new(1024);
        let base = arena.base_ptr();
        arena.alloc(64).unwrap()[0] = 42;
        assert!(arena.offset() > 0);

        arena.reset();
        assert_eq!(arena.offset(), 0);
        assert_eq!(arena.capacity(), 1024);
        assert_eq!(arena.base_ptr(), base);
        assert_eq!(arena.generation(), 1);
    }

    #[test]
    fn destroy_releases_everything() {
        let mut arena = Arena::new(123);
        arena.alloc(100).unwrap();
        arena.destroy();
        assert_eq!(arena.offset(), 0);
        assert_eq!(arena.capacity(), 0);
        assert!(arena.base_ptr().is_none());
        assert!(arena.is_destroyed());
        assert_eq!(arena.alloc(0), Err(ArenaError::Destroyed));
        assert_eq!(arena.alloc(1), Err(ArenaError::Destroyed));
    }

    #[test]
    fn rewind_to_mark_releases_later_allocations() {
        let mut arena = Arena::new(256);
        arena.alloc(16).unwrap();
        let mark = arena.mark();
        arena.alloc(100).unwrap();
        arena.rewind(mark).unwrap();
        assert_eq!(arena.offset(), 16);
    }

    #[test]
    fn rewind_rejects_stale_mark() {
        let mut arena = Arena::new(256);
        let mark = arena.mark();
        arena.reset();
        assert_eq!(
            arena.rewind(mark),
            Err(ArenaError::StaleMark {
                mark_generation: 0,
                generation: 1,
            })
        );
    }

    #[test]
    fn rewind_rejects_mark_ahead_of_offset() {
        let mut arena = Arena::new(256);
        arena.alloc(64).unwrap();
        let mark = arena.mark();
        arena.rewind(Mark::new(0, 0)).unwrap();
        assert_eq!(
            arena.rewind(mark),
            Err(ArenaError::InvalidMark {
                mark_offset: 64,
                offset: 0,
            })
        );
    }

    #[test]
    fn reserve_on_fixed_arena() {
        let mut arena = Arena::new(32);
        assert!(arena.reserve(32).is_ok());
        assert_eq!(
            arena.reserve(33),
            Err(ArenaError::NotGrowable {
                requested: 33,
                remaining: 32,
            })
        );
    }

    #[test]
    fn reserve_grows_growable_arena() {
        let mut arena = Arena::with_config(ArenaConfig::growable(16, 1024)).unwrap();
        arena.alloc_copy(b"0123456789").unwrap();
        arena.reserve(100).unwrap();
        assert!(arena.capacity() >= 110);
        assert_eq!(arena.offset(), 10);
        assert_eq!(arena.generation(), 0);
        assert!(arena.alloc(100).is_ok());
    }

    #[test]
    fn reserve_respects_growth_limit() {
        let mut arena = Arena::with_config(ArenaConfig::growable(16, 64)).unwrap();
        arena.alloc(16).unwrap();
        assert_eq!(
            arena.reserve(49),
            Err(ArenaError::GrowthLimit {
                needed: 65,
                max_capacity: 64,
            })
        );
        arena.reserve(48).unwrap();
        assert_eq!(arena.capacity(), 64);
    }

    #[test]
    fn reserve_from_zero_capacity() {
        let mut arena = Arena::with_config(ArenaConfig::growable(0, 128)).unwrap();
        arena.reserve(10).unwrap();
        assert_eq!(arena.capacity(), 10);
        assert!(arena.alloc(10).is_ok());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn offset_is_sum_of_fitting_allocs(
                capacity in 0usize..2048,
                sizes in proptest::collection::vec(0usize..256, 0..32),
            ) {
                let arena = Arena::new(capacity);
                let mut expected = 0usize;
                for size in sizes {
                    let result = arena.alloc(size);
                    if expected + size <= capacity {
                        prop_assert!(result.is_ok());
                        expected += size;
                    } else {
                        prop_assert!(result.is_err());
                    }
                    prop_assert_eq!(arena.offset(), expected);
                    prop_assert!(arena.offset() <= arena.capacity());
                }
            }

            #[test]
            fn init_preserves_capacity(capacity in 0usize..65536) {
                let arena = Arena::new(capacity);
                prop_assert_eq!(arena.offset(), 0);
                prop_assert_eq!(arena.capacity(), capacity);
            }
        }
    }
}
