//! Word check walkthrough — the reference boards from the crate docs.
//!
//! Demonstrates:
//!   1. Parsing a 5x5 board from a multi-line literal
//!   2. Boolean verdicts through `search`
//!   3. Recovering the concrete trail through `WordQuery::trace`
//!
//! Run with:
//!   cargo run --example word_check

use wordtrail_grid::Board;
use wordtrail_search::{search, WordQuery};

fn check(board: &Board, word: &str, expected: bool) {
    let verdict = search(board, word);
    println!("{word:>8}: {verdict}");
    assert_eq!(verdict, expected, "{word} should be {expected}");
}

fn main() {
    // ─── Reference board ────────────────────────────────────────
    //
    // NOON is found by starting at the N in the top row, heading south,
    // and turning east in the third row. CANON is not: CANO is reachable
    // from the top-left C, but the final N would reuse the front-row N.

    let board = Board::parse(
        5,
        5,
        "N C A N E
         O U I O P
         Z Q Z O N
         F A D P L
         E D E A Z",
    )
    .expect("reference board literal is well-formed");

    check(&board, "NOON", true);
    check(&board, "NOPE", true);
    check(&board, "CANON", false);
    check(&board, "QUINE", false); // would need a diagonal step
    check(&board, "FADED", true); // recovers from a false first path

    // ─── Trail recovery ─────────────────────────────────────────

    let trail = WordQuery::new("NOON")
        .trace(&board)
        .expect("NOON is traceable");
    let steps: Vec<String> = trail.iter().map(|cell| cell.to_string()).collect();
    println!("    NOON: {}", steps.join(" -> "));

    // ─── Winding board ──────────────────────────────────────────
    //
    // NOOOOS needs the N toward the top right, then down, left, up, up,
    // right to collect all four Os and the S.

    let board2 = Board::parse(
        5,
        5,
        "E D O S Z
         N S O N R
         O U O O P
         Z Q Z O R
         F A D P L",
    )
    .expect("winding board literal is well-formed");

    check(&board2, "NOOOOS", true);
}
