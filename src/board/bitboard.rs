//! Bitboard implementation for O(1) line detection

use super::{Cell, COLUMN_STRIDE};

/// Shift strides of the four line directions in the padded layout
pub const HORIZONTAL: u32 = COLUMN_STRIDE as u32; // 7
pub const VERTICAL: u32 = 1;
pub const DIAGONAL_UP: u32 = COLUMN_STRIDE as u32 + 1; // 8
pub const DIAGONAL_DOWN: u32 = COLUMN_STRIDE as u32 - 1; // 6

pub const DIRECTIONS: [u32; 4] = [HORIZONTAL, VERTICAL, DIAGONAL_UP, DIAGONAL_DOWN];

/// Stones of one player, one bit per cell of the padded 7x7 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Set the bit at index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        self.0 |= 1u64 << idx;
    }

    /// Clear the bit at index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.0 &= !(1u64 << idx);
    }

    /// Check if bit is set at index
    #[inline]
    pub fn get(self, idx: usize) -> bool {
        (self.0 >> idx) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Start bits of every four-in-a-row along `stride`.
    #[inline]
    fn fours_along(self, stride: u32) -> u64 {
        let b = self.0;
        b & (b >> stride) & (b >> (2 * stride)) & (b >> (3 * stride))
    }

    /// True if the set contains four contiguous stones in any direction.
    #[inline]
    pub fn has_four(self) -> bool {
        DIRECTIONS.iter().any(|&stride| self.fours_along(stride) != 0)
    }

    /// Every cell that belongs to at least one four-in-a-row.
    pub fn four_cells(self) -> Bitboard {
        let mut cells = 0u64;
        for stride in DIRECTIONS {
            let starts = self.fours_along(stride);
            cells |= starts | (starts << stride) | (starts << (2 * stride)) | (starts << (3 * stride));
        }
        Bitboard(cells)
    }

    /// Iterate over occupied cells in bit order
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.0 }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        while self.bits != 0 {
            let idx = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1;
            // Sentinel bits never belong to a real cell
            if let Some(cell) = Cell::from_index(idx) {
                return Some(cell);
            }
        }
        None
    }
}
