//! Search module for Connect-Four
//!
//! Contains the depth-limited alpha-beta search. There is no transposition
//! table or move history: every node sees only the live board.

pub mod alphabeta;

pub use alphabeta::{best_move, search, SearchResult, SearchStats, Searcher};
