use gridoku_core::{CandidateGrid, Cell, Digit, House};

use crate::rule::Rule;

/// The unique-candidate rule (hidden single).
///
/// If a candidate digit of an empty cell appears in no other cell's
/// candidate set within the cell's row, column, or box, that digit has only
/// one place left in the unit and is forced at this cell. The three unit
/// checks are independent sufficient conditions, evaluated in row, column,
/// box order and short-circuiting on the first that holds.
///
/// Placements are made immediately, with peer elimination run before the
/// scan continues, so subsequent checks in the same pass observe updated
/// candidate sets.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueCandidate;

impl UniqueCandidate {
    /// Creates a new `UniqueCandidate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `true` if `digit` appears in no candidate set of `house`
    /// other than the one at `cell`.
    fn is_unique_in(grid: &CandidateGrid, cell: Cell, digit: Digit, house: House) -> bool {
        house
            .cells()
            .into_iter()
            .all(|other| other == cell || !grid.candidates(other).contains(digit))
    }
}

impl Rule for UniqueCandidate {
    fn name(&self) -> &'static str {
        "unique candidate"
    }

    fn apply(&self, grid: &mut CandidateGrid) -> usize {
        let mut placed = 0;
        for cell in Cell::ALL {
            if grid.grid().get(cell).is_some() {
                continue;
            }
            let houses = [
                House::Row { row: cell.row() },
                House::Column { col: cell.col() },
                House::Box {
                    index: cell.box_index(),
                },
            ];
            'candidates: for digit in grid.candidates(cell) {
                for house in houses {
                    if Self::is_unique_in(grid, cell, digit, house) {
                        grid.place(cell, digit);
                        grid.eliminate_peers(cell);
                        placed += 1;
                        break 'candidates;
                    }
                }
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use gridoku_core::{DigitSet, Grid};

    use super::*;

    fn seeded(grid: Grid) -> CandidateGrid {
        let mut candidates = CandidateGrid::new(grid);
        candidates.eliminate_all();
        candidates
    }

    #[test]
    fn test_hidden_single_in_row() {
        // Row 0 is filled except (0, 2), so 4 has only one place left in
        // the row; the row check fires first.
        let grid: Grid = "
            53. 678 912
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
        "
        .parse()
        .unwrap();
        let mut candidates = seeded(grid);

        assert_eq!(UniqueCandidate::new().apply(&mut candidates), 1);
        assert_eq!(candidates.grid().get(Cell::new(0, 2)), Some(Digit::D4));
    }

    #[test]
    fn test_hidden_single_in_column() {
        // Column 0 is filled except (2, 0), forcing 1 there. The row check
        // fails (1 is still a candidate elsewhere in the empty row 2), so
        // the independent column check must make the placement.
        let grid: Grid = "
            5.. ... ...
            6.. ... ...
            ... ... ...
            8.. ... ...
            4.. ... ...
            7.. ... ...
            9.. ... ...
            2.. ... ...
            3.. ... ...
        "
        .parse()
        .unwrap();
        let mut candidates = seeded(grid);

        assert!(candidates.candidates(Cell::new(2, 1)).contains(Digit::D1));
        assert_eq!(UniqueCandidate::new().apply(&mut candidates), 1);
        assert_eq!(candidates.grid().get(Cell::new(2, 0)), Some(Digit::D1));
    }

    #[test]
    fn test_hidden_single_in_box() {
        // Box 0 is filled except (1, 1), forcing 7 there. Row 1 and column
        // 1 are otherwise empty and keep 7 as a candidate outside the box,
        // so only the box check can make the placement.
        let grid: Grid = "
            534 ... ...
            6.2 ... ...
            198 ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
        "
        .parse()
        .unwrap();
        let mut candidates = seeded(grid);

        assert!(candidates.candidates(Cell::new(1, 4)).contains(Digit::D7));
        assert!(candidates.candidates(Cell::new(4, 1)).contains(Digit::D7));
        assert_eq!(UniqueCandidate::new().apply(&mut candidates), 1);
        assert_eq!(candidates.grid().get(Cell::new(1, 1)), Some(Digit::D7));
    }

    #[test]
    fn test_placement_is_observed_within_pass() {
        // (0, 2) and (0, 8) are the two holes of row 0 (missing 4 and 2).
        // The 4 clues at (1, 5) and (2, 7) rule 4 out at (0, 8) via its box,
        // so 4 is row-unique at (0, 2) and is placed first. Only after that
        // placement is 2 row-unique at (0, 8) - the same pass must pick it
        // up because peer elimination ran immediately.
        let grid: Grid = "
            53. 678 91.
            ... ..4 ...
            ... ... .4.
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
            ... ... ...
        "
        .parse()
        .unwrap();
        let mut candidates = seeded(grid);

        assert_eq!(UniqueCandidate::new().apply(&mut candidates), 2);
        assert_eq!(candidates.grid().get(Cell::new(0, 2)), Some(Digit::D4));
        assert_eq!(candidates.grid().get(Cell::new(0, 8)), Some(Digit::D2));
    }

    #[test]
    fn test_no_change_on_empty_grid() {
        // With all candidate sets full, every digit has nine places per unit
        let mut candidates = seeded(Grid::new());
        assert_eq!(UniqueCandidate::new().apply(&mut candidates), 0);
        assert_eq!(candidates.candidates(Cell::new(4, 4)), DigitSet::FULL);
    }

    #[test]
    fn test_skips_filled_cells() {
        let solved: Grid = "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        "
        .parse()
        .unwrap();
        let mut candidates = seeded(solved.clone());
        assert_eq!(UniqueCandidate::new().apply(&mut candidates), 0);
        assert_eq!(candidates.grid(), &solved);
    }
}
