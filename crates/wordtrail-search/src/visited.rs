//! Path-local visited-cell state with copy-on-descend semantics.

use indexmap::IndexSet;
use wordtrail_grid::Cell;

/// The set of cells already consumed by one in-progress trail attempt.
///
/// `Visited` is extended only through [`with`](Visited::with), which
/// produces a *new* set and leaves the receiver untouched. The search
/// engine relies on this: when a recursive branch fails, its sibling
/// branches at the same level still hold the pre-descent set, never one
/// polluted by the failed sibling's additions.
///
/// Each top-level search attempt starts from [`Visited::new`]; no state is
/// shared between attempts.
#[derive(Clone, Debug, Default)]
pub struct Visited {
    cells: IndexSet<Cell>,
}

impl Visited {
    /// An empty visited set, for the start of a trail attempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `cell` has already been consumed by this trail.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// A new set equal to this one plus `cell`.
    ///
    /// The receiver is not modified; inserting a cell that is already
    /// present yields an equal set.
    #[must_use]
    pub fn with(&self, cell: Cell) -> Self {
        let mut cells = self.cells.clone();
        cells.insert(cell);
        Self { cells }
    }

    /// Number of cells consumed so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no cells have been consumed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
