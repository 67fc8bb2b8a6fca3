//! Depth-limited alpha-beta search over globally signed scores
//!
//! Scores always favour the first player when positive. Instead of negating
//! scores on the way up (negamax), each level compares through the sign of
//! the side to move and hands its window to the child with alpha and beta
//! swapped, so a returned score is directly comparable by the caller.
//!
//! Columns are tried left to right, and a score only replaces the current
//! best when it is strictly better, so among equal scores the lowest column
//! wins.
//!
//! # Example
//!
//! ```
//! use connect_four::board::Board;
//! use connect_four::search::Searcher;
//!
//! let mut board = Board::new();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.best_move(&mut board, 4).unwrap();
//! assert_eq!(result.column, 3);
//! assert_eq!(board, Board::new());
//! ```

use crate::board::{Board, WIDTH};
use crate::error::SearchError;
use crate::eval::{evaluate, INFINITY};

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Static evaluations at the depth horizon
    pub evaluations: u64,
    /// Sibling loops cut short by a collapsed window
    pub beta_cutoffs: u64,
}

/// Search result containing the chosen column and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Column to play (0-based)
    pub column: usize,
    /// Globally signed score of the chosen column
    pub score: i32,
    /// Depth the root was searched to
    pub depth: u32,
    pub stats: SearchStats,
}

/// Alpha-beta searcher. Holds nothing but counters between searches.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since the last [`Searcher::best_move`] or reset.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Score `board` by searching `depth` plies inside the window.
    ///
    /// `alpha` is the bound the side to move tries to improve and `beta` the
    /// bound the opponent already holds. Every move applied here is taken
    /// back before returning, so `board` is unchanged afterwards.
    pub fn search(&mut self, board: &mut Board, mut alpha: i32, beta: i32, depth: u32) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = board.terminal_value() {
            return score;
        }
        if depth == 0 {
            self.stats.evaluations += 1;
            return evaluate(board);
        }

        let sign = board.side_to_move().sign();

        for column in 0..WIDTH {
            // Full column
            let Ok(mut child) = board.play(column) else {
                continue;
            };
            let score = self.search(child.board_mut(), beta, alpha, depth - 1);
            drop(child);

            if sign * score > sign * alpha {
                alpha = score;
            }
            if sign * alpha >= sign * beta {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        alpha
    }

    /// Pick the column for the side to move, searching `depth` plies.
    ///
    /// A depth of 0 scores each reply by the heuristic alone.
    pub fn best_move(&mut self, board: &mut Board, depth: u32) -> Result<SearchResult, SearchError> {
        if board.terminal_value().is_some() {
            return Err(SearchError::GameOver);
        }
        self.reset_stats();

        let sign = board.side_to_move().sign();
        // Worst case for the mover: the opponent's infinity
        let mut alpha = -sign * INFINITY;
        let beta = -alpha;
        let child_depth = depth.saturating_sub(1);
        let mut best = None;

        for column in 0..WIDTH {
            let Ok(mut child) = board.play(column) else {
                continue;
            };
            let score = self.search(child.board_mut(), beta, alpha, child_depth);
            drop(child);

            log::trace!("column {} scores {}", column + 1, score);

            if sign * score > sign * alpha {
                alpha = score;
                best = Some(column);
            }
            if sign * alpha >= sign * beta {
                break;
            }
        }

        let column = best.ok_or(SearchError::GameOver)?;
        log::debug!(
            "depth {}: column {} score {} ({} nodes, {} evaluations)",
            depth,
            column + 1,
            alpha,
            self.stats.nodes,
            self.stats.evaluations
        );

        Ok(SearchResult {
            column,
            score: alpha,
            depth,
            stats: self.stats,
        })
    }
}

/// One-shot [`Searcher::search`] without keeping statistics.
pub fn search(board: &mut Board, alpha: i32, beta: i32, depth: u32) -> i32 {
    Searcher::new().search(board, alpha, beta, depth)
}

/// One-shot [`Searcher::best_move`] returning only the column.
pub fn best_move(board: &mut Board, depth: u32) -> Result<usize, SearchError> {
    Searcher::new().best_move(board, depth).map(|result| result.column)
}
