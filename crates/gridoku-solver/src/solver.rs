//! Solve orchestration.
//!
//! [`Solver`] snapshots the puzzle as given, runs constraint propagation to
//! its fixed point, and falls back to backtracking search for whatever the
//! rules could not finish. Any failure rolls the working state back to the
//! snapshot.

use gridoku_core::{CandidateGrid, Cell, Grid};

use crate::{
    SolveError,
    rule::{Rule, SingleCandidate, UniqueCandidate},
    search::search,
};

/// Counters describing how a [`Solver::solve`] call reached its result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    propagation_passes: usize,
    naked_singles_placed: usize,
    hidden_singles_placed: usize,
    placement_attempts: u64,
    used_search: bool,
}

impl SolveStats {
    /// Number of propagation passes that placed at least one digit.
    #[must_use]
    pub const fn propagation_passes(&self) -> usize {
        self.propagation_passes
    }

    /// Digits placed by the single-candidate rule.
    #[must_use]
    pub const fn naked_singles_placed(&self) -> usize {
        self.naked_singles_placed
    }

    /// Digits placed by the unique-candidate rule.
    #[must_use]
    pub const fn hidden_singles_placed(&self) -> usize {
        self.hidden_singles_placed
    }

    /// Tentative placements made by the backtracking search.
    #[must_use]
    pub const fn placement_attempts(&self) -> u64 {
        self.placement_attempts
    }

    /// Whether propagation alone was insufficient and search ran.
    #[must_use]
    pub const fn used_search(&self) -> bool {
        self.used_search
    }
}

/// A solver holding the original puzzle and the current working state.
///
/// The grid passed to [`Solver::new`] is kept as an immutable snapshot.
/// [`Solver::solve`] works on a separate copy, so a failed attempt leaves
/// the solver exactly as constructed and the puzzle can be inspected or
/// re-solved afterwards.
#[derive(Debug, Clone)]
pub struct Solver {
    initial: Grid,
    current: CandidateGrid,
    stats: SolveStats,
}

impl Solver {
    /// Creates a solver for `grid`.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            initial: grid.clone(),
            current: CandidateGrid::new(grid),
            stats: SolveStats::default(),
        }
    }

    /// The puzzle as given, unaffected by any solving.
    #[must_use]
    pub const fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    /// The current working grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.current.grid()
    }

    /// Counters from the most recent [`solve`](Self::solve) call.
    #[must_use]
    pub const fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Sets the digit of `cell` on the working grid before solving.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidPlacement`] if `value` is not a digit
    /// between 1 and 9.
    pub fn set_digit(&mut self, cell: Cell, value: u8) -> Result<(), SolveError> {
        self.current.set_digit(cell, value)?;
        self.initial = self.current.grid().clone();
        Ok(())
    }

    /// Solves the puzzle in place.
    ///
    /// Runs propagation to its fixed point first and finishes with
    /// backtracking search if cells remain. On success the working grid
    /// holds a complete, valid solution. On failure the working state is
    /// rolled back to the grid as given.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] if the clues contradict each
    /// other or admit no completion.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        self.stats = SolveStats::default();

        if !self.current.grid().is_valid() {
            log::debug!("input grid violates a uniqueness constraint");
            self.rollback();
            return Err(SolveError::NoSolution);
        }

        self.current.eliminate_all();
        self.propagate();
        log::debug!(
            "propagation fixed point after {} passes ({} naked, {} hidden)",
            self.stats.propagation_passes,
            self.stats.naked_singles_placed,
            self.stats.hidden_singles_placed,
        );

        if self.current.grid().is_complete() {
            if self.current.grid().is_valid() {
                return Ok(());
            }
            self.rollback();
            return Err(SolveError::NoSolution);
        }

        self.stats.used_search = true;
        let mut work = self.current.grid().clone();
        if search(&mut work, &mut self.stats.placement_attempts) {
            log::debug!(
                "search found a solution after {} tentative placements",
                self.stats.placement_attempts,
            );
            self.current = CandidateGrid::new(work);
            Ok(())
        } else {
            log::debug!(
                "search exhausted {} tentative placements",
                self.stats.placement_attempts,
            );
            self.rollback();
            Err(SolveError::NoSolution)
        }
    }

    /// Applies both deduction rules alternately until a full pass places
    /// nothing. Passes that place at least one digit are counted.
    fn propagate(&mut self) {
        let naked = SingleCandidate::new();
        let hidden = UniqueCandidate::new();
        loop {
            let naked_placed = naked.apply(&mut self.current);
            let hidden_placed = hidden.apply(&mut self.current);
            if naked_placed + hidden_placed == 0 {
                break;
            }
            self.stats.naked_singles_placed += naked_placed;
            self.stats.hidden_singles_placed += hidden_placed;
            self.stats.propagation_passes += 1;
        }
    }

    fn rollback(&mut self) {
        self.current = CandidateGrid::new(self.initial.clone());
    }
}
