//! Formatting into an arena.

use std::fmt;

use strata_arena::{Arena, ArenaError};

use crate::error::TextError;
use crate::string::Str;

/// Render `args` into `out` as an owned, NUL-terminated string.
///
/// The text is first rendered into a frame over `scratch` sized to what
/// `out` can still hold (less the terminator, and never more than
/// `scratch` has left), then copied into `out`. Output that does not fit
/// is an error, never a truncation.
///
/// Usually called through [`format_in!`](crate::format_in).
pub fn vformat<'o>(
    out: &'o Arena,
    scratch: &mut Arena,
    args: fmt::Arguments<'_>,
) -> Result<Str<'o>, TextError> {
    if out.is_destroyed() {
        return Err(ArenaError::Destroyed.into());
    }
    let frame = scratch.frame();
    let limit = out.remaining().saturating_sub(1).min(frame.remaining());
    let mut writer = SliceWriter::new(frame.alloc(limit)?);
    if fmt::write(&mut writer, args).is_err() {
        return Err(if writer.overflowed {
            TextError::FormatOverflow { limit }
        } else {
            TextError::Format
        });
    }
    Str::new(writer.written()).clone_in(out)
}

/// Format into an arena with `format!` syntax.
///
/// `format_in!(out, scratch, "...", args..)` expands to a call to
/// [`vformat`] and yields `Result<Str<'_>, TextError>`.
///
/// ```
/// use strata_arena::Arena;
/// use strata_text::format_in;
///
/// let out = Arena::new(256);
/// let mut scratch = Arena::new(256);
/// let s = format_in!(&out, &mut scratch, "{} {:.1}", "Test", 2.34).unwrap();
/// assert_eq!(s, "Test 2.3");
/// ```
#[macro_export]
macro_rules! format_in {
    ($out:expr, $scratch:expr, $($arg:tt)*) => {
        $crate::vformat($out, $scratch, ::std::format_args!($($arg)*))
    };
}

/// A `fmt::Write` sink over a fixed slice that fails instead of truncating.
struct SliceWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
    overflowed: bool,
}

impl<'b> SliceWriter<'b> {
    fn new(buf: &'b mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            overflowed: false,
        }
    }

    fn written(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.buf.len() {
            self.overflowed = true;
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}
