//! Connect-Four engine with depth-limited alpha-beta search
//!
//! The position is kept as two 64-bit bitboards over a padded 7x7 grid (six
//! playable rows plus a sentinel row per column), so four-in-a-row detection
//! is a handful of shifts and ANDs. The search explores columns left to right
//! with alpha-beta pruning over globally signed scores.
//!
//! # Architecture
//!
//! - [`board`]: Bitboard position with checked move/undo and a scoped move guard
//! - [`eval`]: Win/draw scores and the per-cell heuristic weight table
//! - [`search`]: Alpha-beta search and root move selection
//! - [`engine`]: Search at a fixed depth with timing and statistics
//! - [`game`]: Game session with per-player agents, used by both front ends
//! - [`config`]: TOML player configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use connect_four::{Board, Engine};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::with_depth(4);
//!
//! let column = engine.get_move(&board).unwrap();
//! board.make_move(column).unwrap();
//! assert_eq!(column, 3);
//! assert_eq!(board.terminal_value(), None);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, HEIGHT, WIDTH};
pub use engine::{Engine, MoveResult, Verdict};
pub use error::{BoardError, ConfigError, GameError, SearchError};
pub use game::{Agent, Game, GameConfig, Outcome};
