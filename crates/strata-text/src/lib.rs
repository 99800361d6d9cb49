//! Byte strings whose storage lives in [`strata_arena`] arenas.
//!
//! [`Str`] is a length-delimited view. Operations that only look at a
//! string (comparison, search, [`Str::cut_view`], [`Str::split_views`])
//! never allocate. Operations that produce new bytes take an output arena
//! and return strings that borrow it, so a result can never outlive the
//! arena it was written into, and a reset of that arena is rejected by the
//! borrow checker while any result is still in use.
//!
//! ```
//! use strata_arena::Arena;
//! use strata_text::Str;
//!
//! let out = Arena::new(1024);
//! let line = Str::from("key = value");
//! let pair = line.cut(" = ", 1, &out).unwrap();
//! assert_eq!(pair.first, "key");
//! assert_eq!(pair.second, "value");
//! assert_eq!(line.find("=", 1), Some(4));
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod format;
mod io;
mod list;
mod pair;
mod search;
mod string;
mod transform;

pub use error::{IoOp, TextError};
pub use format::vformat;
pub use io::{read_file, read_lines};
pub use list::StrList;
pub use pair::StrPair;
pub use string::Str;
