//! Wordtrail: backtracking word-path search over immutable letter grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the wordtrail sub-crates. For most users, adding `wordtrail` as a single
//! dependency is sufficient.
//!
//! A word is *traceable* on a board when its letters can be collected along
//! a contiguous trail: every step moves to an orthogonally adjacent cell
//! (never diagonally) and no cell is used twice within one trail.
//!
//! # Quick start
//!
//! ```rust
//! use wordtrail::prelude::*;
//!
//! let board = Board::parse(
//!     5,
//!     5,
//!     "N C A N E
//!      O U I O P
//!      Z Q Z O N
//!      F A D P L
//!      E D E A Z",
//! )
//! .unwrap();
//!
//! assert!(search(&board, "NOON"));
//! assert!(!search(&board, "CANON")); // no second reachable N
//!
//! let trail = WordQuery::new("NOPE").trace(&board).unwrap();
//! assert_eq!(trail.first(), Some(&Cell::new(0, 3)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `wordtrail-grid` | `Board`, `Cell`, construction errors |
//! | [`search`] | `wordtrail-search` | `WordQuery`, `Visited`, the search entry points |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Letter-grid data structures (`wordtrail-grid`).
///
/// The immutable [`grid::Board`], the [`grid::Cell`] coordinate type, and
/// the construction-time [`grid::GridError`].
pub use wordtrail_grid as grid;

/// The path search engine (`wordtrail-search`).
///
/// [`search::WordQuery`] for reusable queries and trail recovery, plus the
/// [`search::search`] free-function entry point.
pub use wordtrail_search as search;

/// Common imports for typical wordtrail usage.
///
/// ```rust
/// use wordtrail::prelude::*;
/// ```
pub mod prelude {
    pub use wordtrail_grid::{Board, Cell, GridError};
    pub use wordtrail_search::{search, Visited, WordQuery};
}
