//! Letter-grid data structures for wordtrail.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Cell`] coordinate type, the immutable [`Board`] letter grid, and the
//! construction-time [`GridError`] type.
//!
//! A [`Board`] is built once — from raw text via [`Board::parse`] or from an
//! existing cell vector via [`Board::from_cells`] — and is read-only for the
//! lifetime of all subsequent queries. Every cell lookup is bounds-checked:
//! [`Board::get`] returns `None` for out-of-range coordinates rather than
//! panicking, so callers never need to pre-validate coordinates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod cell;
pub mod error;

pub use board::Board;
pub use cell::Cell;
pub use error::GridError;
