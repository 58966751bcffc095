/// One board position: the entered digit, whether the player may edit it,
/// and whether the current value is consistent with the solution.
///
/// A `value` of [`Cell::EMPTY`] means the position holds no digit. Empty
/// cells are always considered valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The digit at this position (0 = empty, 1..=9 otherwise).
    pub value: u8,
    /// Whether the player may change this cell. Givens and solver-filled
    /// cells are not editable.
    pub editable: bool,
    /// Whether the current value matches the solution (empty counts as valid).
    pub valid: bool,
}

impl Cell {
    /// The value representing an empty cell.
    pub const EMPTY: u8 = 0;

    /// Creates a cell from a raw puzzle value.
    ///
    /// Blank positions (`0`) become empty editable cells; clue positions
    /// become fixed cells. Both start out valid.
    #[must_use]
    pub fn from_raw(value: u8) -> Self {
        Self {
            value,
            editable: value == Self::EMPTY,
            valid: true,
        }
    }

    /// Creates a fixed, valid cell holding a solution value.
    #[must_use]
    pub fn solved(value: u8) -> Self {
        Self {
            value,
            editable: false,
            valid: true,
        }
    }

    /// Returns true if the cell holds no digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value == Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn raw_blank_is_empty_and_editable() {
        let cell = Cell::from_raw(0);
        assert!(cell.is_empty());
        assert!(cell.editable);
        assert!(cell.valid);
    }

    #[test]
    fn raw_clue_is_fixed_and_valid() {
        let cell = Cell::from_raw(7);
        assert_eq!(cell.value, 7);
        assert!(!cell.editable);
        assert!(cell.valid);
    }

    #[test]
    fn solved_cell_is_never_editable() {
        let cell = Cell::solved(4);
        assert_eq!(cell.value, 4);
        assert!(!cell.editable);
        assert!(cell.valid);
    }
}
