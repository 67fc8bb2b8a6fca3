//! Board representation for Connect-Four
//!
//! Bit layout (one `u64` per player, one padded column per 7 bits):
//!
//! ```text
//!   6 13 20 27 34 41 48   <- sentinel row, never set
//! | 5 12 19 26 33 40 47 |
//! | 4 11 18 25 32 39 46 |
//! | 3 10 17 24 31 38 45 |
//! | 2  9 16 23 30 37 44 |
//! | 1  8 15 22 29 36 43 |
//! | 0  7 14 21 28 35 42 |
//! ```

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, MoveGuard};

/// Number of columns
pub const WIDTH: usize = 7;
/// Number of playable rows per column
pub const HEIGHT: usize = 6;
/// Bits per column: the playable rows plus one sentinel row
pub const COLUMN_STRIDE: usize = HEIGHT + 1;
pub const CELL_COUNT: usize = WIDTH * HEIGHT; // 42

/// Bit index of the cell at (column, row), row 0 being the bottom.
#[inline]
pub const fn bit_index(column: usize, row: usize) -> usize {
    row + COLUMN_STRIDE * column
}

/// Index of the lowest bit of a column's block.
#[inline]
pub const fn column_base(column: usize) -> usize {
    COLUMN_STRIDE * column
}

/// Index of a column's sentinel (top padding) bit.
#[inline]
pub const fn sentinel_index(column: usize) -> usize {
    COLUMN_STRIDE * column + HEIGHT
}

/// The two sides. `First` moves on even counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Bit-set index (0 or 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    #[inline]
    pub fn from_index(idx: usize) -> Player {
        if idx & 1 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    /// +1 for the first player, -1 for the second: scores are globally
    /// signed in favour of the first player.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }

    /// Glyph used by the text renderer
    pub fn symbol(self) -> char {
        match self {
            Player::First => '●',
            Player::Second => '○',
        }
    }
}

/// A cell on the board, row 0 being the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub column: u8,
    pub row: u8,
}

impl Cell {
    #[inline]
    pub fn new(column: u8, row: u8) -> Self {
        debug_assert!((column as usize) < WIDTH && (row as usize) < HEIGHT);
        Self { column, row }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        bit_index(self.column as usize, self.row as usize)
    }

    /// Inverse of [`Cell::to_index`]; `None` for sentinel and out-of-board bits.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        let column = idx / COLUMN_STRIDE;
        let row = idx % COLUMN_STRIDE;
        if column < WIDTH && row < HEIGHT {
            Some(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }
}
