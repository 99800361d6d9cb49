//! Comparison, hashing, and occurrence search.
//!
//! None of these allocate. Searches report "not found" as `None`.

use crate::string::Str;

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl<'a> Str<'a> {
    /// Identity: same first byte address and same length.
    ///
    /// Any two zero-length strings are the same distinguished empty value.
    /// Two separate copies of the same text are `compare`-equal but not
    /// `equals`-equal.
    pub fn equals<'b>(&self, other: impl Into<Str<'b>>) -> bool {
        let other = other.into();
        self.len() == other.len() && (self.is_empty() || self.as_ptr() == other.as_ptr())
    }

    /// Content equality: same length and same bytes.
    pub fn compare<'b>(&self, other: impl Into<Str<'b>>) -> bool {
        self.as_bytes() == other.into().as_bytes()
    }

    /// Whether the string begins with `prefix`. Always true for an empty prefix.
    pub fn starts_with<'b>(&self, prefix: impl Into<Str<'b>>) -> bool {
        self.as_bytes().starts_with(prefix.into().as_bytes())
    }

    /// Whether the string ends with `suffix`. Always true for an empty suffix.
    pub fn ends_with<'b>(&self, suffix: impl Into<Str<'b>>) -> bool {
        self.as_bytes().ends_with(suffix.into().as_bytes())
    }

    /// 64-bit FNV-1a hash of the content.
    pub fn hash64(&self) -> u64 {
        self.as_bytes().iter().fold(FNV_OFFSET, |hash, &byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
    }

    /// Byte offset of the `count`-th occurrence of `sub`.
    ///
    /// Positive counts search left to right (1 is the first occurrence),
    /// negative counts search right to left, and 0 means 1. Every window
    /// position is tested, so overlapping matches count separately.
    /// Returns `None` if either string is empty, `sub` is longer than the
    /// string, or there are fewer than `|count|` occurrences.
    pub fn find<'b>(&self, sub: impl Into<Str<'b>>, count: isize) -> Option<usize> {
        let needle = sub.into().as_bytes();
        if self.is_empty() || needle.is_empty() || needle.len() > self.len() {
            return None;
        }
        let skip = count.unsigned_abs().max(1) - 1;
        let mut positions = self
            .as_bytes()
            .windows(needle.len())
            .enumerate()
            .filter(|(_, window)| *window == needle)
            .map(|(pos, _)| pos);
        if count < 0 {
            positions.nth_back(skip)
        } else {
            positions.nth(skip)
        }
    }

    /// Number of non-overlapping occurrences of `sub`, scanning left to right.
    pub fn count<'b>(&self, sub: impl Into<Str<'b>>) -> usize {
        let sub = sub.into();
        let mut rest = *self;
        let mut found = 0;
        while let Some(pos) = rest.find(sub, 1) {
            found += 1;
            rest = rest.tail(pos + sub.len());
        }
        found
    }
}
