//! Main AI engine wrapping the searcher with a depth, timing and statistics
//!
//! # Example
//!
//! ```
//! use connect_four::{Board, Engine};
//!
//! let mut engine = Engine::with_depth(4);
//! let board: Board = "44".parse().unwrap();
//!
//! let result = engine.get_move_with_stats(&board).unwrap();
//! println!("Best column: {}", result.column + 1);
//! println!("Time: {}ms, {} evaluations", result.time_ms, result.evaluations);
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, Player};
use crate::error::SearchError;
use crate::eval::WIN_SCORE;
use crate::search::{SearchResult, Searcher};

/// Default search depth per move
pub const DEFAULT_DEPTH: u32 = 8;

/// What the score of a search says about the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The horizon was reached; the score is a positional estimate
    Heuristic,
    /// The player can force four in a row within the searched depth
    ForcedWin(Player),
}

impl Verdict {
    #[inline]
    pub fn from_score(score: i32) -> Self {
        if score >= WIN_SCORE {
            Verdict::ForcedWin(Player::First)
        } else if score <= -WIN_SCORE {
            Verdict::ForcedWin(Player::Second)
        } else {
            Verdict::Heuristic
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Column to play (0-based)
    pub column: usize,
    /// Globally signed score, positive favouring the first player
    pub score: i32,
    pub verdict: Verdict,
    /// Depth searched
    pub depth: u32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of static evaluations
    pub evaluations: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    pub elapsed: Duration,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, elapsed: Duration) -> Self {
        Self {
            column: result.column,
            score: result.score,
            verdict: Verdict::from_score(result.score),
            depth: result.depth,
            nodes: result.stats.nodes,
            evaluations: result.stats.evaluations,
            time_ms: elapsed.as_millis() as u64,
            elapsed,
        }
    }
}

/// Minimax engine playing at a fixed depth.
pub struct Engine {
    searcher: Searcher,
    max_depth: u32,
}

impl Engine {
    /// Create an engine searching [`DEFAULT_DEPTH`] plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine with a custom search depth. A depth of 0 picks the
    /// move by the heuristic alone.
    #[must_use]
    pub fn with_depth(max_depth: u32) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth,
        }
    }

    pub fn set_max_depth(&mut self, depth: u32) {
        self.max_depth = depth;
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Get the best column for the side to move.
    pub fn get_move(&mut self, board: &Board) -> Result<usize, SearchError> {
        self.get_move_with_stats(board).map(|result| result.column)
    }

    /// Get the best column with search statistics and wall-clock time.
    ///
    /// The search runs on a private copy, so `board` is never touched.
    pub fn get_move_with_stats(&mut self, board: &Board) -> Result<MoveResult, SearchError> {
        let start = Instant::now();
        let mut work_board = board.clone();
        let result = self.searcher.best_move(&mut work_board, self.max_depth)?;
        let result = MoveResult::from_search(result, start.elapsed());

        log::debug!(
            "{:?} plays column {} at depth {} in {}ms ({:?})",
            board.side_to_move(),
            result.column + 1,
            result.depth,
            result.time_ms,
            result.verdict
        );
        Ok(result)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        assert_eq!(Engine::new().max_depth(), DEFAULT_DEPTH);
        let mut engine = Engine::with_depth(3);
        assert_eq!(engine.max_depth(), 3);
        engine.set_max_depth(5);
        assert_eq!(engine.max_depth(), 5);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let board: Board = "112233".parse().unwrap();
        let result = Engine::with_depth(4).get_move_with_stats(&board).unwrap();
        assert_eq!(result.column, 3);
        assert_eq!(result.verdict, Verdict::ForcedWin(Player::First));
    }

    #[test]
    fn test_engine_does_not_touch_board() {
        let board: Board = "4453".parse().unwrap();
        let before = board.clone();
        let mut engine = Engine::with_depth(5);
        let _ = engine.get_move(&board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = Engine::with_depth(4);
        let result = engine.get_move_with_stats(&Board::new()).unwrap();
        assert_eq!(result.column, 3);
        assert_eq!(result.verdict, Verdict::Heuristic);
        assert!(result.evaluations > 0);
    }

    #[test]
    fn test_engine_game_over() {
        let board: Board = "1212121".parse().unwrap();
        assert_eq!(Engine::new().get_move(&board), Err(SearchError::GameOver));
    }

    #[test]
    fn test_verdict_from_score() {
        assert_eq!(Verdict::from_score(WIN_SCORE), Verdict::ForcedWin(Player::First));
        assert_eq!(Verdict::from_score(-WIN_SCORE), Verdict::ForcedWin(Player::Second));
        assert_eq!(Verdict::from_score(42), Verdict::Heuristic);
    }
}
