//! Benchmark board profiles for the wordtrail search engine.
//!
//! Provides pre-built boards for benchmarking:
//!
//! - [`reference_board`]: the 5x5 board from the crate docs
//! - [`uniform_board`]: a single-letter board that forces maximal
//!   backtracking when searched for a near-covering word

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wordtrail_grid::Board;

/// The 5x5 reference board used throughout the documentation and tests.
pub fn reference_board() -> Board {
    Board::parse(
        5,
        5,
        "N C A N E
         O U I O P
         Z Q Z O N
         F A D P L
         E D E A Z",
    )
    .expect("reference board literal is well-formed")
}

/// A `rows x cols` board where every cell holds `letter`.
///
/// Searching such a board for a word of repeated `letter`s that ends in a
/// different character explores every self-avoiding trail of that length —
/// the engine's worst case.
pub fn uniform_board(rows: u32, cols: u32, letter: char) -> Board {
    Board::from_cells(rows, cols, vec![letter; (rows * cols) as usize])
        .expect("uniform board dimensions are valid")
}
