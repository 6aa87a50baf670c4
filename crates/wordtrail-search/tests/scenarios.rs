//! End-to-end scenarios on the reference boards.
//!
//! These tests exercise the full public surface — text parsing through
//! query evaluation — rather than individual engine internals.

use wordtrail_grid::{Board, Cell};
use wordtrail_search::{search, WordQuery};

fn reference_board() -> Board {
    Board::parse(
        5,
        5,
        "N C A N E
         O U I O P
         Z Q Z O N
         F A D P L
         E D E A Z",
    )
    .unwrap()
}

fn winding_board() -> Board {
    Board::parse(
        5,
        5,
        "E D O S Z
         N S O N R
         O U O O P
         Z Q Z O R
         F A D P L",
    )
    .unwrap()
}

#[test]
fn reference_board_verdicts() {
    let board = reference_board();
    assert!(search(&board, "NOON"));
    assert!(search(&board, "NOPE"));
    assert!(!search(&board, "CANON"));
    assert!(!search(&board, "QUINE"));
    assert!(search(&board, "FADED"));
}

#[test]
fn winding_board_finds_nooooos() {
    // Needs the N toward the top right, then down, left, up, up, right to
    // collect all four Os and the S.
    assert!(search(&winding_board(), "NOOOOS"));
}

#[test]
fn every_successful_trail_is_orthogonal_and_reuse_free() {
    let board = reference_board();
    for word in ["NOON", "NOPE", "FADED", "ZQZ", "EDEA"] {
        let trail = WordQuery::new(word)
            .trace(&board)
            .unwrap_or_else(|| panic!("{word} should be traceable"));
        for pair in trail.windows(2) {
            assert!(
                pair[0].is_adjacent(pair[1]),
                "{word}: step {} -> {} is not orthogonal",
                pair[0],
                pair[1],
            );
        }
        let mut cells: Vec<Cell> = trail.clone();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), trail.len(), "{word}: trail reuses a cell");
    }
}

#[test]
fn verdicts_are_independent_across_queries() {
    // Letter consumption never leaks between attempts: the same word
    // evaluates identically no matter what ran before it.
    let board = reference_board();
    assert!(search(&board, "NOON"));
    assert!(search(&board, "NOON"));
    assert!(!search(&board, "CANON"));
    assert!(search(&board, "NOON"));
}

#[test]
fn word_longer_than_the_board_fails_cleanly() {
    let board = reference_board();
    let word: String = std::iter::repeat('N').take(26).collect();
    assert!(!search(&board, &word));
}

#[test]
fn queries_run_against_a_shared_board_across_threads() {
    // Board is immutable and queries own all their state, so concurrent
    // evaluation needs no synchronization.
    let board = reference_board();
    std::thread::scope(|scope| {
        let found = scope.spawn(|| search(&board, "NOON"));
        let missing = scope.spawn(|| search(&board, "QUINE"));
        assert!(found.join().unwrap());
        assert!(!missing.join().unwrap());
    });
}
