//! Solving engine for 9×9 grids.
//!
//! Solving runs in two stages. Constraint propagation applies the
//! [`rule::SingleCandidate`] and [`rule::UniqueCandidate`] deduction rules
//! until neither makes progress, filling every logically forced cell. If the
//! grid is still incomplete, exhaustive backtracking [`search`](search::search)
//! finishes it. A puzzle that cannot be completed leaves the solver in its
//! initial state.
//!
//! # Examples
//!
//! ```
//! use gridoku_solver::Solver;
//!
//! let grid = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! let mut solver = Solver::new(grid);
//! solver.solve()?;
//! assert!(solver.grid().is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use derive_more::{Display, Error, From};
use gridoku_core::PlaceError;

pub use self::solver::{SolveStats, Solver};

pub mod rule;
pub mod search;
mod solver;

/// An error returned by a solving session.
#[derive(Debug, Display, Error, From, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The clues contradict each other or admit no completion.
    #[display("no solution exists for the given grid")]
    NoSolution,
    /// A digit outside 1-9 was placed.
    #[from]
    InvalidPlacement(#[error(source)] PlaceError),
}
