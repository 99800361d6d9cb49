//! Ordered sequences of strings.

use std::ops::Index;

use smallvec::SmallVec;
use strata_arena::Arena;

use crate::error::TextError;
use crate::string::Str;
use crate::transform::assemble;

/// Inline capacity before a list spills to the heap.
const INLINE_PIECES: usize = 4;

/// An insertion-ordered list of strings, as produced by a split.
///
/// A list always holds at least one element; the empty list is a single
/// empty string. Element bytes belong to whatever built the list: the
/// input string for [`Str::split_views`], the output arena for
/// [`Str::split`], or the file buffer for [`read_lines`](crate::read_lines).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StrList<'a> {
    items: SmallVec<[Str<'a>; INLINE_PIECES]>,
}

impl<'a> StrList<'a> {
    /// A one-element list.
    pub fn from_first(first: Str<'a>) -> Self {
        let mut items = SmallVec::new();
        items.push(first);
        Self { items }
    }

    pub(crate) fn from_items(mut items: SmallVec<[Str<'a>; INLINE_PIECES]>) -> Self {
        if items.is_empty() {
            items.push(Str::EMPTY);
        }
        Self { items }
    }

    /// Append an element.
    pub fn push(&mut self, item: Str<'a>) {
        self.items.push(item);
    }

    /// Number of elements. Never zero.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this is the empty list: one element, and that element empty.
    pub fn is_empty(&self) -> bool {
        self.items.len() == 1 && self.items[0].is_empty()
    }

    /// The first element.
    pub fn first(&self) -> Str<'a> {
        self.items[0]
    }

    /// The element at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<Str<'a>> {
        self.items.get(index).copied()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Str<'a>> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[Str<'a>] {
        &self.items
    }

    /// Owned concatenation of the elements with `delim` between them.
    ///
    /// The result length is computed up front, so exactly one allocation of
    /// that size plus the terminator is made in `out`.
    pub fn join<'b, 'o>(&self, delim: impl Into<Str<'b>>, out: &'o Arena) -> Result<Str<'o>, TextError> {
        let delim = delim.into().as_bytes();
        let parts = self.items.iter().enumerate().flat_map(move |(i, item)| {
            let sep: &[u8] = if i == 0 { &[] } else { delim };
            [sep, item.as_bytes()]
        });
        assemble(out, parts)
    }
}

impl Default for StrList<'_> {
    fn default() -> Self {
        Self::from_first(Str::EMPTY)
    }
}

impl<'a> Index<usize> for StrList<'a> {
    type Output = Str<'a>;

    fn index(&self, index: usize) -> &Str<'a> {
        &self.items[index]
    }
}

impl<'a> FromIterator<Str<'a>> for StrList<'a> {
    fn from_iter<I: IntoIterator<Item = Str<'a>>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for StrList<'a> {
    type Item = Str<'a>;
    type IntoIter = smallvec::IntoIter<[Str<'a>; INLINE_PIECES]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'l, 'a> IntoIterator for &'l StrList<'a> {
    type Item = &'l Str<'a>;
    type IntoIter = std::slice::Iter<'l, Str<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
