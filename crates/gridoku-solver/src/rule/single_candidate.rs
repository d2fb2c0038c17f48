use gridoku_core::{CandidateGrid, Cell};

use crate::rule::Rule;

/// The single-candidate rule (naked single).
///
/// An empty cell whose candidate set has exactly one remaining member must
/// hold that digit. The rule places it and propagates the placement to the
/// cell's 20 peers before continuing the scan, so one placement can expose
/// further singletons within the same pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleCandidate;

impl SingleCandidate {
    /// Creates a new `SingleCandidate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for SingleCandidate {
    fn name(&self) -> &'static str {
        "single candidate"
    }

    fn apply(&self, grid: &mut CandidateGrid) -> usize {
        let mut placed = 0;
        for cell in Cell::ALL {
            if grid.grid().get(cell).is_some() {
                continue;
            }
            if let Some(digit) = grid.candidates(cell).as_single() {
                grid.place(cell, digit);
                grid.eliminate_peers(cell);
                placed += 1;
            }
        }
        placed
    }
}
