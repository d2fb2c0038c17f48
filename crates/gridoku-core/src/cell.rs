//! Board positions and the peer relation.

use tinyvec::ArrayVec;

/// One of the 81 positions of the board, addressed by `(row, col)`,
/// 0-indexed.
///
/// # Examples
///
/// ```
/// use gridoku_core::Cell;
///
/// let cell = Cell::new(4, 7);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 7);
/// assert_eq!(cell.box_index(), 5);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Array containing all 81 cells in row-major order.
    ///
    /// The search engine's deterministic cell selection ("last empty cell in
    /// scan order") is defined in terms of this ordering.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a cell from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3×3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns the 20 peers of this cell: every other cell sharing its row,
    /// column, or box.
    ///
    /// The relation is computed from coordinates on each call; nothing is
    /// stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::Cell;
    ///
    /// let peers = Cell::new(0, 0).peers();
    /// assert_eq!(peers.len(), 20);
    /// assert!(peers.contains(&Cell::new(0, 8))); // same row
    /// assert!(peers.contains(&Cell::new(8, 0))); // same column
    /// assert!(peers.contains(&Cell::new(2, 2))); // same box
    /// assert!(!peers.contains(&Cell::new(0, 0))); // not itself
    /// ```
    #[must_use]
    pub fn peers(self) -> ArrayVec<[Self; 20]> {
        let mut peers = ArrayVec::new();
        for i in 0..9 {
            if i != self.col {
                peers.push(Self::new(self.row, i));
            }
            if i != self.row {
                peers.push(Self::new(i, self.col));
            }
        }
        let box_row = self.row / 3 * 3;
        let box_col = self.col / 3 * 3;
        for row in box_row..box_row + 3 {
            for col in box_col..box_col + 3 {
                if row != self.row && col != self.col {
                    peers.push(Self::new(row, col));
                }
            }
        }
        peers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Cell::ALL.len(), 81);
        assert_eq!(Cell::ALL[0], Cell::new(0, 0));
        assert_eq!(Cell::ALL[8], Cell::new(0, 8));
        assert_eq!(Cell::ALL[9], Cell::new(1, 0));
        assert_eq!(Cell::ALL[80], Cell::new(8, 8));

        // Row-major order matches the derived (row, col) ordering
        for pair in Cell::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Cell::new(0, 0).box_index(), 0);
        assert_eq!(Cell::new(2, 2).box_index(), 0);
        assert_eq!(Cell::new(0, 3).box_index(), 1);
        assert_eq!(Cell::new(4, 4).box_index(), 4);
        assert_eq!(Cell::new(8, 8).box_index(), 8);
        assert_eq!(Cell::new(6, 0).box_index(), 6);
    }

    #[test]
    fn test_peers_count_and_membership() {
        for cell in Cell::ALL {
            let peers = cell.peers();
            assert_eq!(peers.len(), 20, "cell {cell:?}");
            assert!(!peers.contains(&cell));

            // Every peer shares a unit with the cell
            for peer in peers {
                let shares = peer.row() == cell.row()
                    || peer.col() == cell.col()
                    || peer.box_index() == cell.box_index();
                assert!(shares, "{peer:?} is not a peer of {cell:?}");
            }
        }
    }

    #[test]
    fn test_peers_are_distinct() {
        let mut peers: Vec<_> = Cell::new(4, 4).peers().to_vec();
        peers.sort_unstable();
        peers.dedup();
        assert_eq!(peers.len(), 20);
    }

    #[test]
    fn test_peer_relation_is_symmetric() {
        let a = Cell::new(3, 5);
        for b in a.peers() {
            assert!(b.peers().contains(&a));
        }
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Cell::new(9, 0);
    }
}
