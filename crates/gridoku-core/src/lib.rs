//! Core data structures for the gridoku solving engine.
//!
//! This crate provides the grid and candidate model shared by every solving
//! stage: the 9×9 digit grid with its fixed-format parser and printer, the
//! per-cell candidate sets, and the row/column/box validation primitives.
//!
//! # Overview
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`cell`]: board positions and the 20-cell peer relation
//! - [`digit_set`]: bitmask-backed candidate sets
//! - [`house`]: rows, columns, and boxes (27 units)
//! - [`grid`]: the digit grid, parsing, printing, and validation
//! - [`candidate_grid`]: the candidate model and its elimination primitives
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{CandidateGrid, Cell, Digit, Grid};
//!
//! let grid: Grid = "
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
//! let mut candidates = CandidateGrid::new(grid);
//! candidates.eliminate_all();
//! assert!(!candidates.candidates(Cell::new(0, 2)).contains(Digit::D5));
//! # Ok::<(), gridoku_core::ParseGridError>(())
//! ```

pub mod candidate_grid;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;

pub use self::{
    candidate_grid::{CandidateGrid, PlaceError},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    house::House,
};
