//! Backtracking word-path search over letter grids.
//!
//! Given an immutable [`Board`](wordtrail_grid::Board) and a target word,
//! this crate decides whether the word can be traced as a contiguous trail:
//! each step moves to an orthogonally adjacent cell (no diagonals) and no
//! cell is revisited within a single trail.
//!
//! The engine is total — it returns a boolean for every constructed board
//! and every word, including the empty word, and never raises an error.
//! Out-of-range coordinate access during the walk is an ordinary non-match,
//! never a fault.
//!
//! # Quick start
//!
//! ```
//! use wordtrail_grid::Board;
//! use wordtrail_search::{search, WordQuery};
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
//! assert!(!search(&board, "QUINE")); // would need a diagonal step
//!
//! // A query can be parsed once and run against many boards, and can
//! // also report the concrete trail it found.
//! let query = WordQuery::new("NOPE");
//! let trail = query.trace(&board).unwrap();
//! assert_eq!(trail.len(), 4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod visited;

pub use engine::{search, WordQuery};
pub use visited::Visited;
