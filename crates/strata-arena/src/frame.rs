//! Scoped scratch windows.
//!
//! [`Frame`] replaces the "pass the scratch arena by value" idiom: it
//! records the arena offset on creation and rewinds to it when dropped, so
//! everything allocated through the frame is released together. The
//! backing buffer is reused, and nothing is cleared; the next allocation
//! zero-fills whatever it hands out.

use std::ops::{Deref, DerefMut};

use crate::arena::Arena;
use crate::mark::Mark;

/// A scratch window over an [`Arena`].
///
/// Dereferences to the arena, so all allocation methods are available.
/// Regions allocated through a frame borrow the frame and cannot outlive
/// it. Frames nest: `frame.frame()` opens an inner window that rewinds to
/// its own entry offset first.
///
/// # Aliasing contract
///
/// Sequential frames over the same arena start from the same offset and
/// hand out the same bytes again. Results that must survive a frame have
/// to be copied into a different (output) arena before the frame drops.
///
/// ```
/// use strata_arena::Arena;
///
/// let mut scratch = Arena::new(64);
/// {
///     let frame = scratch.frame();
///     frame.alloc(48).unwrap();
///     assert_eq!(frame.offset(), 48);
/// }
/// assert_eq!(scratch.offset(), 0);
/// ```
pub struct Frame<'a> {
    arena: &'a mut Arena,
    entry: Mark,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(arena: &'a mut Arena) -> Self {
        let entry = arena.mark();
        Self { arena, entry }
    }

    /// The offset this frame will rewind to.
    pub fn entry(&self) -> Mark {
        self.entry
    }

    /// Bytes allocated inside this frame so far.
    pub fn used(&self) -> usize {
        self.arena.offset().saturating_sub(self.entry.offset())
    }
}

impl Deref for Frame<'_> {
    type Target = Arena;

    fn deref(&self) -> &Arena {
        &*self.arena
    }
}

impl DerefMut for Frame<'_> {
    fn deref_mut(&mut self) -> &mut Arena {
        &mut *self.arena
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        // A reset or destroy inside the frame already released everything.
        self.arena.restore(self.entry);
    }
}
