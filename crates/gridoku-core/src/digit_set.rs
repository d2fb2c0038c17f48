//! A set of candidate digits for a single cell.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// A set of digits 1-9, backed by a `u16` bitmask.
///
/// Bit `i` represents digit `i + 1`, giving O(1) membership tests, insertion
/// and removal with no allocation. This is the candidate-set representation
/// used for every cell of the board.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
///
/// A singleton set reveals its digit, which is how naked singles are
/// detected:
///
/// ```
/// use gridoku_core::{Digit, DigitSet};
///
/// let set = DigitSet::singleton(Digit::D3);
/// assert_eq!(set.as_single(), Some(Digit::D3));
/// assert_eq!(DigitSet::FULL.as_single(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const FULL_BITS: u16 = 0b1_1111_1111;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: FULL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    #[must_use]
    pub const fn singleton(digit: Digit) -> Self {
        Self {
            bits: 1 << (digit.value() - 1),
        }
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let old = self.bits;
        self.bits |= Self::singleton(digit).bits;
        self.bits != old
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let old = self.bits;
        self.bits &= !Self::singleton(digit).bits;
        self.bits != old
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::singleton(digit).bits != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// If the set contains exactly one digit, returns it.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        Digit::new(value)
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        let value = index as u8 + 1;
        Digit::new(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}
