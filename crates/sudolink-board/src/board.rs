use crate::Cell;

/// A raw square matrix of digits as exchanged with the puzzle service.
///
/// `0` marks a blank position.
pub type Grid = Vec<Vec<u8>>;

/// The full grid of [`Cell`]s for the in-progress puzzle.
///
/// The board is owned by the game state and is only replaced wholesale or
/// cell-patched by reducer transitions; no other component writes to it.
/// The matrix is square (typically 9×9, but any N×N is supported).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Builds a board from a raw puzzle grid.
    ///
    /// Blank positions become empty editable cells, clues become fixed
    /// cells, and every cell starts out valid. The input is assumed to be a
    /// well-formed square matrix.
    #[must_use]
    pub fn from_raw(raw: &Grid) -> Self {
        let cells = raw
            .iter()
            .map(|row| row.iter().copied().map(Cell::from_raw).collect())
            .collect();
        Self { cells }
    }

    /// Builds a fully solved board: every cell fixed, valid, and holding the
    /// corresponding solution value.
    #[must_use]
    pub fn solved(solution: &Solution) -> Self {
        let cells = solution
            .grid()
            .iter()
            .map(|row| row.iter().copied().map(Cell::solved).collect())
            .collect();
        Self { cells }
    }

    /// Returns the side length of the board (0 before a puzzle is loaded).
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no puzzle has been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at the given position, if in bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    /// Iterates over the board rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Replaces the cell at the given position.
    ///
    /// Returns false (leaving the board untouched) if the position is out of
    /// bounds. Intended for reducer transitions only.
    pub fn replace(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Returns the current digit values as a raw grid (0 for empty cells),
    /// in the shape the puzzle service expects.
    #[must_use]
    pub fn values(&self) -> Grid {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.value).collect())
            .collect()
    }
}

/// The full grid of correct digit values for the current puzzle.
///
/// Fetched once per game from the gateway and used to judge cell entries
/// locally and to materialize the solved board on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    grid: Grid,
}

impl Solution {
    /// Wraps a solution grid returned by the puzzle service.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Returns the solution value at the given position, if in bounds.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Option<u8> {
        self.grid.get(row)?.get(col).copied()
    }

    /// Returns the side length of the solution grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    /// Returns the underlying digit matrix.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
