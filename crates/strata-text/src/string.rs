//! The string value: a view or an arena-owned copy.

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::str::Utf8Error;

use crate::error::TextError;

/// A length-delimited byte string borrowed for `'a`.
///
/// A `Str` is either a *view* into memory owned elsewhere (a literal, a
/// file buffer, another string) or an *owned* copy produced by an
/// operation that allocated into an output arena. Both share this one
/// representation; the lifetime ties either kind to its owner, so a `Str`
/// cannot be used once its arena has been reset or destroyed.
///
/// Owned strings carry a trailing NUL byte that is not part of
/// [`len`](Self::len); [`as_bytes_with_nul`](Self::as_bytes_with_nul)
/// exposes it for interop with C-style consumers.
///
/// `==` compares content. Identity is [`equals`](Self::equals).
#[derive(Clone, Copy)]
pub struct Str<'a> {
    /// Content, followed by one NUL byte when the string is terminated.
    raw: &'a [u8],
    len: usize,
}

impl<'a> Str<'a> {
    /// The distinguished empty string.
    pub const EMPTY: Self = Self { raw: &[], len: 0 };

    /// A view over `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            raw: bytes,
            len: bytes.len(),
        }
    }

    /// A view over `raw` whose last byte is a NUL terminator.
    ///
    /// Returns `None` if `raw` does not end with a NUL byte.
    pub fn from_bytes_with_nul(raw: &'a [u8]) -> Option<Self> {
        match raw.last() {
            Some(0) => Some(Self::terminated(raw)),
            _ => None,
        }
    }

    /// Wrap an owned buffer; the final byte is the terminator.
    pub(crate) fn terminated(raw: &'a [u8]) -> Self {
        debug_assert_eq!(raw.last(), Some(&0));
        Self {
            raw,
            len: raw.len().saturating_sub(1),
        }
    }

    /// Length in bytes, excluding any terminator.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the string has no content.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The content bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.raw[..self.len]
    }

    /// The content followed by its NUL terminator, if it has one.
    pub fn as_bytes_with_nul(&self) -> Option<&'a [u8]> {
        self.is_terminated().then_some(self.raw)
    }

    /// Whether a NUL byte directly follows the content.
    pub fn is_terminated(&self) -> bool {
        self.raw.len() == self.len + 1
    }

    /// Address of the first byte. Used for identity comparison.
    pub fn as_ptr(&self) -> *const u8 {
        self.raw.as_ptr()
    }

    /// The content as UTF-8 text.
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// A view over `[pos, pos + len)`.
    pub fn view(&self, pos: usize, len: usize) -> Result<Str<'a>, TextError> {
        match pos.checked_add(len) {
            Some(end) if end <= self.len => Ok(Str::new(&self.raw[pos..end])),
            _ => Err(TextError::OutOfRange {
                pos,
                len,
                available: self.len,
            }),
        }
    }

    /// The first `end` bytes. `end` must not exceed `len`.
    pub(crate) fn head(&self, end: usize) -> Str<'a> {
        Str::new(&self.raw[..end])
    }

    /// Everything from `start` on, keeping the terminator if there is one.
    pub(crate) fn tail(&self, start: usize) -> Str<'a> {
        Str {
            raw: &self.raw[start..],
            len: self.len - start,
        }
    }
}

impl Default for Str<'_> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(text: &'a str) -> Self {
        Str::new(text.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Str<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Str::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Str<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Str::new(bytes)
    }
}

impl AsRef<[u8]> for Str<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'b> PartialEq<Str<'b>> for Str<'_> {
    fn eq(&self, other: &Str<'b>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Str<'_> {}

impl PartialEq<str> for Str<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for Str<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.as_bytes()))
    }
}
