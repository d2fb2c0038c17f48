//! The candidate model: per-cell candidate sets over a digit grid.

use derive_more::{Display, Error};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, grid::Grid};

/// Error returned when a placement value is outside the range 1-9.
///
/// This guard should never trip with a validated grid; if it does, it
/// indicates a logic defect in the caller, not a recoverable condition.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The placement value is not a digit 1-9.
    #[display("invalid placement: {value} is not a digit 1-9")]
    InvalidPlacement {
        /// The rejected value.
        value: u8,
    },
}

/// A digit grid paired with a parallel 9×9 array of candidate sets.
///
/// The candidate sets record which digits have not yet been ruled out for
/// each cell. They are seeded from the clues with [`eliminate_all`] and
/// kept current by running [`eliminate_peers`] after every placement.
///
/// Invariant: once a digit is placed at a cell, that cell's candidate set is
/// fixed to the singleton of that digit and is never emptied.
///
/// [`eliminate_all`]: CandidateGrid::eliminate_all
/// [`eliminate_peers`]: CandidateGrid::eliminate_peers
///
/// # Examples
///
/// ```
/// use gridoku_core::{CandidateGrid, Cell, Digit, Grid};
///
/// let mut candidates = CandidateGrid::new(Grid::new());
/// candidates.set_digit(Cell::new(4, 4), 5)?;
/// candidates.eliminate_peers(Cell::new(4, 4));
///
/// // 5 has been ruled out for every peer
/// assert!(!candidates.candidates(Cell::new(4, 0)).contains(Digit::D5));
/// // and fixed as the only candidate of the placed cell
/// assert_eq!(
///     candidates.candidates(Cell::new(4, 4)).as_single(),
///     Some(Digit::D5),
/// );
/// # Ok::<(), gridoku_core::PlaceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    grid: Grid,
    candidates: [[DigitSet; 9]; 9],
}

impl CandidateGrid {
    /// Creates a candidate model over the given grid, with every candidate
    /// set full.
    ///
    /// Call [`eliminate_all`](Self::eliminate_all) to seed the sets from the
    /// grid's clues.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self {
            grid,
            candidates: [[DigitSet::FULL; 9]; 9],
        }
    }

    /// Returns the underlying digit grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the model and returns the underlying digit grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns the candidate set for a cell.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.candidates[cell.row() as usize][cell.col() as usize]
    }

    /// Places a raw value at a cell.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::InvalidPlacement`] if `value` is outside 1-9.
    pub fn set_digit(&mut self, cell: Cell, value: u8) -> Result<(), PlaceError> {
        let digit = Digit::new(value).ok_or(PlaceError::InvalidPlacement { value })?;
        self.place(cell, digit);
        Ok(())
    }

    /// Places a digit at a cell.
    ///
    /// The candidate sets are not touched; run
    /// [`eliminate_peers`](Self::eliminate_peers) afterwards to propagate
    /// the placement.
    pub const fn place(&mut self, cell: Cell, digit: Digit) {
        self.grid.set(cell, Some(digit));
    }

    /// Propagates the digit at `cell` to its peers.
    ///
    /// Removes that digit from the candidate sets of all 20 peers and fixes
    /// the cell's own candidate set to the singleton of the digit. A no-op
    /// if the cell is empty. Idempotent: re-running after no change yields
    /// no further effect.
    pub fn eliminate_peers(&mut self, cell: Cell) {
        let Some(digit) = self.grid.get(cell) else {
            return;
        };
        for peer in cell.peers() {
            self.candidates[peer.row() as usize][peer.col() as usize].remove(digit);
        }
        self.candidates[cell.row() as usize][cell.col() as usize] = DigitSet::singleton(digit);
    }

    /// Seeds the candidate model by applying
    /// [`eliminate_peers`](Self::eliminate_peers) to every filled cell.
    ///
    /// Called once at the start of a solve to derive the candidate sets from
    /// the given clues.
    pub fn eliminate_all(&mut self) {
        for cell in Cell::ALL {
            self.eliminate_peers(cell);
        }
    }
}
