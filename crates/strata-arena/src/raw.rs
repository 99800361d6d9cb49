//! Low-level bump buffer backing every [`Arena`](crate::Arena).
//!
//! This is the only module in the workspace allowed to use `unsafe`.
//! The invariant that makes it sound: `bump` hands out `[cursor, cursor +
//! size)` and advances the cursor, so regions borrowed through `&self`
//! never overlap. Every operation that moves the cursor backwards or
//! replaces the allocation takes `&mut self`, which ends all such borrows.

#![allow(unsafe_code)]

use std::cell::Cell;
use std::ptr::NonNull;

/// A heap buffer of `len` bytes with a bump cursor, owned like a `Box<[u8]>`.
pub(crate) struct BumpBuffer {
    ptr: NonNull<u8>,
    len: usize,
    cursor: Cell<usize>,
}

// SAFETY: BumpBuffer uniquely owns its allocation, exactly like Box<[u8]>.
// It is not Sync (Cell), so regions are only ever handed out on one thread.
unsafe impl Send for BumpBuffer {}

impl BumpBuffer {
    /// Allocate a zero-initialised buffer. Returns `None` for `len == 0`.
    pub(crate) fn zeroed(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let boxed: Box<[u8]> = vec![0u8; len].into_boxed_slice();
        Some(Self {
            ptr: NonNull::from(Box::leak(boxed)).cast::<u8>(),
            len,
            cursor: Cell::new(0),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor.get()
    }

    pub(crate) fn as_non_null(&self) -> NonNull<u8> {
        self.ptr
    }

    /// Hand out the next `size` bytes, zero-filled.
    ///
    /// Returns `None` if fewer than `size` bytes remain.
    #[allow(clippy::mut_from_ref)]
    pub(crate) fn bump(&self, size: usize) -> Option<&mut [u8]> {
        let start = self.cursor.get();
        let end = start.checked_add(size).filter(|&end| end <= self.len)?;
        self.cursor.set(end);
        // SAFETY: `[start, end)` lies inside the allocation and beyond every
        // region handed out since the cursor last moved backwards. Moving it
        // backwards requires `&mut self`, so no earlier region overlapping
        // this range can still be borrowed.
        let region = unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr().add(start), size) };
        region.fill(0);
        Some(region)
    }

    /// Move the cursor to `cursor` (which must not exceed `len`).
    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        debug_assert!(cursor <= self.len);
        self.cursor.set(cursor.min(self.len));
    }

    /// Reallocate to `new_len` bytes, keeping everything below the cursor.
    pub(crate) fn grow(&mut self, new_len: usize) {
        debug_assert!(new_len >= self.len);
        let keep = self.cursor.get();
        let mut next = vec![0u8; new_len].into_boxed_slice();
        // SAFETY: `keep <= self.len`, and `&mut self` means no region is
        // borrowed while the old contents are read.
        let old = unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), keep) };
        next[..keep].copy_from_slice(old);
        // The old allocation is released by the Drop of the replaced value.
        *self = Self {
            ptr: NonNull::from(Box::leak(next)).cast::<u8>(),
            len: new_len,
            cursor: Cell::new(keep),
        };
    }
}

#[cfg(test)]
impl BumpBuffer {
    /// Bytes below the cursor. `&mut self` keeps every region unborrowed.
    fn used(&mut self) -> &[u8] {
        // SAFETY: `cursor <= len` and no region can be borrowed.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.cursor.get()) }
    }
}

impl Drop for BumpBuffer {
    fn drop(&mut self) {
        let slice = std::ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len);
        // SAFETY: `ptr`/`len` came from Box::leak of a Box<[u8]> with exactly
        // this length, and are released exactly once here.
        drop(unsafe { Box::from_raw(slice) });
    }
}
