//! Whole-file ingestion into an arena.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use log::debug;
use strata_arena::Arena;

use crate::error::{IoOp, TextError};
use crate::list::StrList;
use crate::string::Str;
use crate::transform::split_in_place;

/// Read the whole file at `path` into `out` as one owned string.
///
/// The size comes from the file's metadata, and exactly that many bytes
/// plus a terminator are allocated. A file that shrinks before it is read
/// fails with [`IoOp::Read`].
pub fn read_file<'o>(path: impl AsRef<Path>, out: &'o Arena) -> Result<Str<'o>, TextError> {
    read_terminated(path.as_ref(), out).map(|buf| Str::terminated(buf))
}

/// Read the file at `path` into `out` and split it into lines in place.
///
/// Every line is a view into the one file buffer, with its newline
/// overwritten by a NUL terminator. A final newline does not produce an
/// empty last line.
pub fn read_lines<'o>(path: impl AsRef<Path>, out: &'o Arena) -> Result<StrList<'o>, TextError> {
    read_terminated(path.as_ref(), out).map(|buf| split_in_place(buf, b'\n'))
}

fn read_terminated<'o>(path: &Path, out: &'o Arena) -> Result<&'o mut [u8], TextError> {
    let size = fs::metadata(path)
        .map_err(|err| TextError::io(path, IoOp::Metadata, err))?
        .len();
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    let mut file = File::open(path).map_err(|err| TextError::io(path, IoOp::Open, err))?;
    let buf = out.alloc(size.saturating_add(1))?;
    file.read_exact(&mut buf[..size])
        .map_err(|err| TextError::io(path, IoOp::Read, err))?;
    debug!("read {size} bytes from '{}'", path.display());
    Ok(buf)
}
