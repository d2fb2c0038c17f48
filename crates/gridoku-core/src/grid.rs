//! The 9×9 digit grid: parsing, printing, and validation.

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, house::House};

/// Error returned when a puzzle text cannot be parsed into a grid.
#[derive(Debug, DeriveDisplay, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input does not yield exactly 9 rows of 9 cells.
    #[display("malformed grid: expected 81 cells, found {cells}")]
    MalformedGrid {
        /// Number of cell markers found in the input.
        cells: usize,
    },
}

/// A 9×9 matrix of cells, each either a digit 1-9 or empty.
///
/// This is the value grid shared by all solving stages. Parsing accepts the
/// original fixed text format (digits fill cells, `.` marks an empty cell),
/// plus `_` and `0` as conventional empty markers; every other character is
/// treated as decoration and skipped, so pretty-printed grids parse back.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Cell, Digit, Grid};
///
/// let grid: Grid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
///
/// assert_eq!(grid.get(Cell::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Cell::new(0, 2)), None);
/// assert!(grid.is_valid());
/// assert!(!grid.is_complete());
/// # Ok::<(), gridoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Digit>; 9]; 9],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the value at a cell.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.row() as usize][cell.col() as usize]
    }

    /// Sets or clears the value at a cell.
    pub const fn set(&mut self, cell: Cell, value: Option<Digit>) {
        self.cells[cell.row() as usize][cell.col() as usize] = value;
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Cell::ALL.iter().all(|&cell| self.get(cell).is_some())
    }

    /// Returns `true` if no row, column, or box contains the same digit
    /// twice. Empty cells are ignored.
    ///
    /// This is the pruning predicate of the backtracking search, so it stays
    /// a cheap O(9)-per-unit scan over [`DigitSet`]s.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for cell in house.cells() {
                if let Some(digit) = self.get(cell) {
                    if !seen.insert(digit) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Index<Cell> for Grid {
    type Output = Option<Digit>;

    fn index(&self, cell: Cell) -> &Option<Digit> {
        &self.cells[cell.row() as usize][cell.col() as usize]
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::new();
        let mut cells = 0;
        for ch in s.chars() {
            let value = match ch {
                '1'..='9' => Digit::new(ch as u8 - b'0'),
                '.' | '_' | '0' => None,
                _ => continue,
            };
            if cells < 81 {
                grid.set(Cell::ALL[cells], value);
            }
            cells += 1;
        }
        if cells != 81 {
            return Err(ParseGridError::MalformedGrid { cells });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "{}", "-".repeat(21))?;
            }
            for col in 0..9 {
                if col > 0 {
                    f.write_char(' ')?;
                }
                if col > 0 && col % 3 == 0 {
                    f.write_str("| ")?;
                }
                match self.get(Cell::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('.')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
