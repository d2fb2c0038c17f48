//! Sudoku houses (rows, columns, and 3×3 boxes).

use crate::cell::Cell;

/// A Sudoku house: a row, a column, or one of the nine 3×3 boxes.
///
/// There are 27 houses in total, each containing 9 cells. Houses are the
/// units over which the uniqueness invariant is checked and over which the
/// unique-candidate rule reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Cell`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn cell(self, i: u8) -> Cell {
        assert!(i < 9);
        match self {
            Self::Row { row } => Cell::new(row, i),
            Self::Column { col } => Cell::new(i, col),
            Self::Box { index } => Cell::new(index / 3 * 3 + i / 3, index % 3 * 3 + i % 3),
        }
    }

    /// Returns all nine cells contained in this house.
    #[must_use]
    pub fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell::default(); 9];
        for (i, slot) in cells.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *slot = self.cell(i);
        }
        cells
    }
}
