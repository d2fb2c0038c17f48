//! Constraint-propagation deduction rules.
//!
//! Each rule scans the candidate model for cells whose value is forced,
//! places those digits, and immediately propagates each placement to the
//! cell's peers, so later checks in the same pass observe updated candidate
//! sets.

use std::fmt::Debug;

use gridoku_core::CandidateGrid;

pub use self::{single_candidate::SingleCandidate, unique_candidate::UniqueCandidate};

mod single_candidate;
mod unique_candidate;

/// A deduction rule of the propagation engine.
///
/// Rules only ever fill cells whose value is logically forced; they never
/// guess. The propagation engine applies them alternately until neither
/// makes progress in a full pass (the fixed point).
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Applies the rule once across the whole grid.
    ///
    /// Returns the count of cells newly filled this pass. Every placement is
    /// followed by peer elimination before the scan continues.
    fn apply(&self, grid: &mut CandidateGrid) -> usize;
}
