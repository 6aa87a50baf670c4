//! The recursive matcher and the all-starts search driver.

use crate::visited::Visited;
use wordtrail_grid::{Board, Cell};

/// A target word, parsed once and reusable across boards.
///
/// Holds the word as a character sequence. Any sequence is a valid query,
/// including length 0 (trivially traceable) and length 1 (traceable iff the
/// letter occurs anywhere on the board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordQuery {
    letters: Vec<char>,
}

impl WordQuery {
    /// Parse a query from a word.
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.chars().collect(),
        }
    }

    /// The letters of the target word, in order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the target word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// `true` for the empty word.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Decide whether the word can be traced on `board`.
    ///
    /// Tries every cell in row-major order as a starting point and runs the
    /// recursive matcher from each with a fresh empty [`Visited`] set; the
    /// first success short-circuits. The empty word is trivially traceable.
    /// A word longer than the board's cell count returns `false` up front:
    /// no trail can consume more cells than the board has.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrail_grid::Board;
    /// use wordtrail_search::WordQuery;
    ///
    /// let board = Board::parse(2, 2, "A B  C D").unwrap();
    /// assert!(WordQuery::new("ABD").is_traceable(&board));
    /// assert!(!WordQuery::new("AD").is_traceable(&board)); // diagonal
    /// ```
    pub fn is_traceable(&self, board: &Board) -> bool {
        if self.letters.is_empty() {
            return true;
        }
        if self.letters.len() > board.cell_count() {
            return false;
        }
        board
            .cells()
            .any(|(cell, _)| match_at(board, &self.letters, cell, &Visited::new()))
    }

    /// The first trail spelling the word on `board`, or `None`.
    ///
    /// Starting cells are tried in row-major order and descent follows the
    /// board's fixed N, S, W, E neighbour order, so the trail returned is
    /// deterministic. `Some` exactly when [`is_traceable`](Self::is_traceable)
    /// is `true`; the empty word yields an empty trail.
    pub fn trace(&self, board: &Board) -> Option<Vec<Cell>> {
        if self.letters.is_empty() {
            return Some(Vec::new());
        }
        if self.letters.len() > board.cell_count() {
            return None;
        }
        let mut trail = Vec::with_capacity(self.letters.len());
        for (cell, _) in board.cells() {
            if trace_at(board, &self.letters, cell, &Visited::new(), &mut trail) {
                return Some(trail);
            }
        }
        None
    }
}

/// Decide whether `word` can be traced on `board`.
///
/// Convenience wrapper equivalent to `WordQuery::new(word).is_traceable(board)`.
pub fn search(board: &Board, word: &str) -> bool {
    WordQuery::new(word).is_traceable(board)
}

/// Recursive matcher: can `letters` be traced starting at `cell`?
///
/// `letters` must be non-empty. The three guards run in order: the combined
/// bounds/identity check (an out-of-range cell reads as `None` and is never
/// a match), the revisit check, then completion when one letter remains.
/// Descent extends `visited` by copy, so sibling branches always see the
/// pre-descent set.
fn match_at(board: &Board, letters: &[char], cell: Cell, visited: &Visited) -> bool {
    if board.get(cell) != Some(letters[0]) {
        return false;
    }
    if visited.contains(cell) {
        return false;
    }
    if letters.len() == 1 {
        return true;
    }
    let visited = visited.with(cell);
    board
        .neighbours(cell)
        .into_iter()
        .any(|nb| match_at(board, &letters[1..], nb, &visited))
}

/// Trail-building twin of [`match_at`].
///
/// Pushes `cell` onto `trail` while exploring and pops it again when the
/// branch fails, so on success `trail` holds exactly the cells of the
/// discovered path in order, and on failure it is restored to its state at
/// entry. Visited-state handling is identical to [`match_at`].
fn trace_at(
    board: &Board,
    letters: &[char],
    cell: Cell,
    visited: &Visited,
    trail: &mut Vec<Cell>,
) -> bool {
    if board.get(cell) != Some(letters[0]) {
        return false;
    }
    if visited.contains(cell) {
        return false;
    }
    trail.push(cell);
    if letters.len() == 1 {
        return true;
    }
    let visited = visited.with(cell);
    for nb in board.neighbours(cell) {
        if trace_at(board, &letters[1..], nb, &visited, trail) {
            return true;
        }
    }
    trail.pop();
    false
}
