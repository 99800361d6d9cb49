//! The two halves of a cut.

use strata_arena::Arena;

use crate::error::TextError;
use crate::string::Str;
use crate::transform::assemble;

/// The result of cutting a string around one delimiter occurrence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StrPair<'a> {
    /// Everything before the delimiter.
    pub first: Str<'a>,
    /// Everything after the delimiter. Empty when the delimiter was absent.
    pub second: Str<'a>,
}

impl<'a> StrPair<'a> {
    /// Pair two strings.
    pub const fn new(first: Str<'a>, second: Str<'a>) -> Self {
        Self { first, second }
    }

    /// Owned `first + delim + second`; the empty string if both halves are empty.
    pub fn join<'b, 'o>(&self, delim: impl Into<Str<'b>>, out: &'o Arena) -> Result<Str<'o>, TextError> {
        if self.first.is_empty() && self.second.is_empty() {
            return Ok(Str::EMPTY);
        }
        assemble(
            out,
            [
                self.first.as_bytes(),
                delim.into().as_bytes(),
                self.second.as_bytes(),
            ],
        )
    }
}
