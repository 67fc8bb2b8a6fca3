//! Score constants and the per-cell weight table

/// Score of a won position for the first player (negated for the second).
///
/// Larger than any sum of cell weights, so a forced result always outranks
/// a heuristic estimate.
pub const WIN_SCORE: i32 = 100_000;

/// Root search bound, beyond any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Number of four-in-a-row lines through each cell, indexed by bit index.
/// Sentinel cells weigh 0.
#[rustfmt::skip]
pub const CELL_WEIGHTS: [i32; 49] = [
    3, 4,  5,  5, 4, 3, 0,
    4, 6,  8,  8, 6, 4, 0,
    5, 8, 11, 11, 8, 5, 0,
    7, 9, 13, 13, 9, 7, 0,
    5, 8, 11, 11, 8, 5, 0,
    4, 6,  8,  8, 6, 4, 0,
    3, 4,  5,  5, 4, 3, 0,
];
