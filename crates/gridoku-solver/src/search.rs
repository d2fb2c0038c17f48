//! Exhaustive backtracking search.
//!
//! The fallback stage for grids the deduction rules cannot finish. It works
//! on the digit grid alone and does not consult the candidate model: each
//! empty cell is tried with every digit in ascending order, pruning branches
//! as soon as the grid stops being valid.

use gridoku_core::{Cell, Digit, Grid};
use tinyvec::ArrayVec;

/// Fills every empty cell of `grid` with a consistent assignment, trying
/// digits exhaustively with backtracking.
///
/// Empty cells are assigned starting from the last one in row-major order.
/// For each cell the digits 1 through 9 are tried in ascending order; a
/// tentative placement is kept only while [`Grid::is_valid`] holds and the
/// remaining cells can be completed under it. When no digit works the cell
/// is cleared again and the previous tentative placement is retried with its
/// next digit.
///
/// Returns `true` and leaves `grid` completely filled if an assignment
/// exists. Returns `false` and restores `grid` to its state at entry if the
/// clues admit no completion. `attempts` is incremented once per tentative
/// placement.
pub fn search(grid: &mut Grid, attempts: &mut u64) -> bool {
    let mut empties: ArrayVec<[Cell; 81]> = Cell::ALL
        .into_iter()
        .filter(|&cell| grid.get(cell).is_none())
        .collect();
    search_from(grid, &mut empties, attempts)
}

fn search_from(grid: &mut Grid, empties: &mut ArrayVec<[Cell; 81]>, attempts: &mut u64) -> bool {
    let Some(cell) = empties.pop() else {
        return grid.is_valid();
    };
    for digit in Digit::ALL {
        grid.set(cell, Some(digit));
        *attempts += 1;
        if grid.is_valid() && search_from(grid, empties, attempts) {
            return true;
        }
    }
    grid.set(cell, None);
    empties.push(cell);
    false
}
