//! Terminal and heuristic scoring of board positions

use crate::board::{Board, Player};

use super::weights::{CELL_WEIGHTS, WIN_SCORE};

/// Score of a decided position: `WIN_SCORE` if the first player has four
/// in a row, `-WIN_SCORE` if the second has, `0` on a full board.
///
/// Returns `None` while the game is still open.
#[must_use]
pub fn terminal_score(board: &Board) -> Option<i32> {
    match board.check_winner() {
        Some(Player::First) => Some(WIN_SCORE),
        Some(Player::Second) => Some(-WIN_SCORE),
        None if board.is_full() => Some(0),
        None => None,
    }
}

/// Sum of cell weights under the first player's stones minus the same for
/// the second player's.
///
/// Does not look for wins; callers check [`terminal_score`] first.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    weight_of(board, Player::First) - weight_of(board, Player::Second)
}

#[inline]
fn weight_of(board: &Board, player: Player) -> i32 {
    board
        .bitboard(player)
        .iter_ones()
        .map(|cell| CELL_WEIGHTS[cell.to_index()])
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_is_antisymmetric_under_colour_swap() {
        // Same two cells with the colours swapped
        let a: Board = "34".parse().unwrap();
        assert_eq!(evaluate(&a), 5 - 7);
        let b: Board = "43".parse().unwrap();
        assert_eq!(evaluate(&b), 7 - 5);
    }

    #[test]
    fn test_terminal_score_open_game() {
        assert_eq!(terminal_score(&"4444".parse().unwrap()), None);
    }

    #[test]
    fn test_terminal_score_first_player_checked_first() {
        let board: Board = "1122334".parse().unwrap();
        assert_eq!(terminal_score(&board), Some(WIN_SCORE));
    }
}
