//! Board structure with incremental move/undo

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{bit_index, column_base, sentinel_index, Cell, Player, CELL_COUNT, HEIGHT, WIDTH};
use crate::error::BoardError;
use crate::eval;

/// Game board: one bitboard per player plus per-column drop heights
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Stones of the first (index 0) and second (index 1) player
    bitboards: [Bitboard; 2],
    /// Bit index where the next stone of each column lands
    heights: [u8; WIDTH],
    /// Stones placed so far; `counter & 1` is the side to move
    counter: u32,
}

impl Board {
    pub fn new() -> Self {
        let mut heights = [0u8; WIDTH];
        for (column, height) in heights.iter_mut().enumerate() {
            *height = column_base(column) as u8;
        }
        Self {
            bitboards: [Bitboard::new(); 2],
            heights,
            counter: 0,
        }
    }

    /// Replay a sequence of columns from the empty board.
    ///
    /// Fails on the first move that is out of range, lands in a full column
    /// or is played after the game has already ended.
    pub fn from_moves(columns: &[usize]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (index, &column) in columns.iter().enumerate() {
            if board.terminal_value().is_some() || !board.is_valid(column) {
                return Err(BoardError::IllegalSequence { index, column });
            }
            board.push(column);
        }
        Ok(board)
    }

    /// True iff the column exists and still has room below its sentinel.
    #[inline]
    pub fn is_valid(&self, column: usize) -> bool {
        column < WIDTH && (self.heights[column] as usize) < sentinel_index(column)
    }

    /// Drop a stone for the side to move.
    pub fn make_move(&mut self, column: usize) -> Result<(), BoardError> {
        if column >= WIDTH {
            return Err(BoardError::ColumnOutOfRange(column));
        }
        if !self.is_valid(column) {
            return Err(BoardError::ColumnFull(column));
        }
        self.push(column);
        Ok(())
    }

    /// Take back the top stone of `column`.
    ///
    /// The stone must belong to the player who moved last. The board keeps
    /// no move history, so when several columns are topped by that player's
    /// stones any of them is accepted; callers that need exact history
    /// (like [`crate::Game`]) keep the column list themselves.
    pub fn undo_move(&mut self, column: usize) -> Result<(), BoardError> {
        if column >= WIDTH {
            return Err(BoardError::ColumnOutOfRange(column));
        }
        if self.counter == 0 {
            return Err(BoardError::NothingToUndo);
        }
        let height = self.heights[column] as usize;
        let last_mover = ((self.counter - 1) & 1) as usize;
        if height == column_base(column) || !self.bitboards[last_mover].get(height - 1) {
            return Err(BoardError::UndoMismatch(column));
        }
        self.pop(column);
        Ok(())
    }

    /// Apply a move that is reverted when the returned guard is dropped.
    pub fn play(&mut self, column: usize) -> Result<MoveGuard<'_>, BoardError> {
        self.make_move(column)?;
        let counter = self.counter;
        Ok(MoveGuard {
            board: self,
            column,
            counter,
        })
    }

    /// Unchecked move: the mover is taken before the counter advances.
    #[inline]
    pub(crate) fn push(&mut self, column: usize) {
        let mover = (self.counter & 1) as usize;
        self.bitboards[mover].set(self.heights[column] as usize);
        self.counter += 1;
        self.heights[column] += 1;
    }

    /// Unchecked inverse of [`Board::push`].
    #[inline]
    pub(crate) fn pop(&mut self, column: usize) {
        self.counter -= 1;
        self.heights[column] -= 1;
        let mover = (self.counter & 1) as usize;
        self.bitboards[mover].clear(self.heights[column] as usize);
    }

    /// Player owning a four-in-a-row, the first player checked first.
    pub fn check_winner(&self) -> Option<Player> {
        self.bitboards
            .iter()
            .position(|bb| bb.has_four())
            .map(Player::from_index)
    }

    /// Score of a decided position, `None` while the game goes on.
    #[inline]
    pub fn terminal_value(&self) -> Option<i32> {
        eval::terminal_score(self)
    }

    /// Static positional score of a non-terminal position.
    pub fn heuristic_value(&self) -> Result<i32, BoardError> {
        if self.terminal_value().is_some() {
            return Err(BoardError::Terminal);
        }
        Ok(eval::evaluate(self))
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        Player::from_index((self.counter & 1) as usize)
    }

    /// Total stones on board
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.counter
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.counter as usize >= CELL_COUNT
    }

    #[inline]
    pub fn bitboard(&self, player: Player) -> Bitboard {
        self.bitboards[player.index()]
    }

    /// Number of stones in a column, `None` for a column off the board
    #[inline]
    pub fn column_height(&self, column: usize) -> Option<usize> {
        let height = *self.heights.get(column)?;
        Some(height as usize - column_base(column))
    }

    /// Owner of the cell at (column, row), row 0 being the bottom
    pub fn cell(&self, column: usize, row: usize) -> Option<Player> {
        if column >= WIDTH || row >= HEIGHT {
            return None;
        }
        let idx = bit_index(column, row);
        if self.bitboards[0].get(idx) {
            Some(Player::First)
        } else if self.bitboards[1].get(idx) {
            Some(Player::Second)
        } else {
            None
        }
    }

    /// Cells of every four-in-a-row on the board
    pub fn winning_cells(&self) -> Vec<Cell> {
        let cells = self.bitboards[0].four_cells().bits() | self.bitboards[1].four_cells().bits();
        Bitboard::from_bits(cells).iter_ones().collect()
    }

    /// Parse 1-based column digits such as `"4453"`; whitespace is ignored.
    pub fn parse_moves(s: &str) -> Result<Vec<usize>, BoardError> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_digit(10) {
                Some(d @ 1..=7) => Ok(d as usize - 1),
                _ => Err(BoardError::BadMoveChar(c)),
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_moves(&Self::parse_moves(s)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            write!(f, " ")?;
            for column in 0..WIDTH {
                let symbol = self.cell(column, row).map_or('·', Player::symbol);
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        writeln!(f, " 1 2 3 4 5 6 7")
    }
}

/// A move applied through [`Board::play`]; dropping it takes the move back.
///
/// The guard only hands out shared access to the board. Further moves go
/// through [`MoveGuard::play`], whose guards borrow this one and so are
/// always dropped first.
///
/// ```compile_fail
/// use connect_four::Board;
///
/// let mut board = Board::new();
/// let mut guard = board.play(0).unwrap();
/// guard.make_move(1).unwrap();
/// ```
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    column: usize,
    /// Move count right after this guard's move
    counter: u32,
}

impl MoveGuard<'_> {
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Apply a further move on top of this one.
    pub fn play(&mut self, column: usize) -> Result<MoveGuard<'_>, BoardError> {
        self.board.play(column)
    }

    /// Mutable access for the search, which leaves the board as it found it.
    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        debug_assert_eq!(self.board.counter, self.counter, "board changed under a move guard");
        self.board.pop(self.column);
    }
}
