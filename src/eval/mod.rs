//! Evaluation module for Connect-Four positions
//!
//! Scores are globally signed: positive values favour the first player,
//! negative values the second. The evaluation considers:
//! - Win/loss/draw detection
//! - Per-cell weights counting the four-in-a-row lines through each cell

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, terminal_score};
pub use weights::{CELL_WEIGHTS, INFINITY, WIN_SCORE};
