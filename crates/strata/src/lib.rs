//! Strata: region-based memory with byte strings that live in it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let out = Arena::new(4 * 1024);
//! let mut scratch = Arena::new(4 * 1024);
//!
//! let record = Str::from("name=strata;kind=arena;kind=text");
//! let fields = record.split(";", 0, &out).unwrap();
//! assert_eq!(fields.len(), 3);
//!
//! let kinds = record.count("kind=");
//! let line = format_in!(&out, &mut scratch, "{} fields, {} kinds", fields.len(), kinds).unwrap();
//! assert_eq!(line, "3 fields, 2 kinds");
//!
//! let compact = record.replace("kind=", 0, &out, &mut scratch).unwrap();
//! assert_eq!(compact, "name=strata;arena;text");
//! assert_eq!(scratch.offset(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `strata-arena` | `Arena`, `Frame`, `Mark`, configuration and errors |
//! | [`text`] | `strata-text` | `Str`, `StrPair`, `StrList`, transforms, formatting, file reads |
//! | [`log`] | `strata-log` | `ArenaLogger`, a `log::Log` backend formatting through arenas |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bump arenas and scratch frames (`strata-arena`).
pub use strata_arena as arena;

/// Byte strings, search, and transforms (`strata-text`).
///
/// The [`text::format_in!`] macro formats into an arena with `format!`
/// syntax; it is also re-exported from the [`prelude`].
pub use strata_text as text;

/// The arena-backed logging backend (`strata-log`).
pub use strata_log as log;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use strata_arena::{Arena, ArenaConfig, ArenaError, Frame, Mark};

    // Strings
    pub use strata_text::{format_in, read_file, read_lines, Str, StrList, StrPair, TextError};
}
