//! Region-based byte allocation for Strata.
//!
//! Provides a bump-allocated [`Arena`] with a monotonically increasing
//! offset, scoped scratch windows ([`Frame`]) and checkpoints ([`Mark`]).
//! This crate is the only one in the workspace that contains `unsafe` code,
//! confined to the private `raw` module.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── BumpBuffer (one contiguous, zero-initialised byte buffer)
//! ├── offset (bump pointer, Cell so allocation takes &self)
//! ├── generation (bumped on reset / destroy)
//! └── Frame<'_> (records the offset on entry, rewinds on drop)
//! ```
//!
//! # Lifetime model
//!
//! Every region returned by [`Arena::alloc`] borrows the arena. Operations
//! that invalidate regions ([`Arena::reset`], [`Arena::rewind`],
//! [`Arena::reserve`], [`Arena::destroy`]) take `&mut self`, so a region
//! can never be read after its bytes were handed out again.
//!
//! # Scratch frames
//!
//! A function that needs transient space takes `scratch: &mut Arena` and
//! opens a [`Frame`]. Whatever it allocates inside the frame is released
//! when the frame drops, so the caller's offset is unchanged on return.
//! Two sequential calls given the same scratch arena therefore start from
//! the same offset and overwrite each other's scratch bytes; anything that
//! must survive the call has to be copied into an output arena.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod arena;
pub mod config;
pub mod error;
pub mod frame;
pub mod mark;
mod raw;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use frame::Frame;
pub use mark::Mark;
