use super::*;
use crate::error::BoardError;
use crate::eval::WIN_SCORE;
use proptest::prelude::*;

/// A full board with no four-in-a-row anywhere
const DRAWN_GAME: &str = "547125662261271266215743771576315353334444";

fn board(moves: &str) -> Board {
    moves.parse().expect("valid move sequence")
}

#[test]
fn test_player_opponent() {
    assert_eq!(Player::First.opponent(), Player::Second);
    assert_eq!(Player::Second.opponent(), Player::First);
    assert_eq!(Player::from_index(0), Player::First);
    assert_eq!(Player::from_index(1), Player::Second);
}

#[test]
fn test_layout_constants() {
    assert_eq!(CELL_COUNT, 42);
    assert_eq!(bit_index(0, 0), 0);
    assert_eq!(bit_index(3, 2), 23);
    assert_eq!(bit_index(6, 5), 47);
    assert_eq!(
        (0..WIDTH).map(sentinel_index).collect::<Vec<_>>(),
        vec![6, 13, 20, 27, 34, 41, 48]
    );
}

#[test]
fn test_cell_index_conversion() {
    let cell = Cell::new(4, 3);
    assert_eq!(cell.to_index(), 31);
    assert_eq!(Cell::from_index(31), Some(cell));
    assert_eq!(Cell::from_index(13), None); // sentinel
    assert_eq!(Cell::from_index(49), None);
}

#[test]
fn test_new_board() {
    let board = Board::new();
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.side_to_move(), Player::First);
    assert!((0..WIDTH).all(|c| board.is_valid(c) && board.column_height(c) == Some(0)));
    assert_eq!(board.check_winner(), None);
    assert_eq!(board.terminal_value(), None);
}

#[test]
fn test_make_move_uses_mover_before_increment() {
    let mut board = Board::new();
    board.make_move(3).unwrap();
    assert_eq!(board.cell(3, 0), Some(Player::First));
    assert_eq!(board.side_to_move(), Player::Second);

    board.make_move(3).unwrap();
    assert_eq!(board.cell(3, 1), Some(Player::Second));
    assert_eq!(board.column_height(3), Some(2));
    assert_eq!(board.column_height(WIDTH), None);
    assert_eq!(board.move_count(), 2);
}

#[test]
fn test_bitboards_stay_disjoint() {
    let board = board(DRAWN_GAME);
    let first = board.bitboard(Player::First).bits();
    let second = board.bitboard(Player::Second).bits();
    assert_eq!(first & second, 0);
    assert_eq!(first.count_ones(), 21);
    assert_eq!(second.count_ones(), 21);
}

#[test]
fn test_column_fill_bound() {
    let mut board = Board::new();
    for _ in 0..HEIGHT {
        assert!(board.is_valid(2));
        board.make_move(2).unwrap();
    }
    assert!(!board.is_valid(2));
    assert_eq!(board.make_move(2), Err(BoardError::ColumnFull(2)));
    assert_eq!(board.move_count(), 6);
}

#[test]
fn test_invalid_column() {
    let mut board = Board::new();
    assert!(!board.is_valid(7));
    assert_eq!(board.make_move(7), Err(BoardError::ColumnOutOfRange(7)));
    assert_eq!(board, Board::new());
}

#[test]
fn test_undo_restores_previous_state() {
    let mut board = board("4453");
    let before = board.clone();
    board.make_move(6).unwrap();
    board.undo_move(6).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_undo_preconditions() {
    let mut board = Board::new();
    assert_eq!(board.undo_move(0), Err(BoardError::NothingToUndo));

    board.make_move(0).unwrap();
    board.make_move(1).unwrap();
    // Column 0 holds the first player's stone, but the second player moved last
    assert_eq!(board.undo_move(0), Err(BoardError::UndoMismatch(0)));
    assert_eq!(
        BoardError::UndoMismatch(0).to_string(),
        "top stone of column 0 was not placed by the last mover"
    );
    // Empty column
    assert_eq!(board.undo_move(5), Err(BoardError::UndoMismatch(5)));
    assert_eq!(board.undo_move(8), Err(BoardError::ColumnOutOfRange(8)));
    assert_eq!(board.move_count(), 2);

    board.undo_move(1).unwrap();
    board.undo_move(0).unwrap();
    assert_eq!(board, Board::new());
}

#[test]
fn test_move_guard_reverts_on_drop() {
    let mut board = board("44");
    let before = board.clone();
    {
        let mut guard = board.play(2).unwrap();
        assert_eq!(guard.column(), 2);
        assert_eq!(guard.cell(2, 0), Some(Player::First));
        {
            let nested = guard.play(2).unwrap();
            assert_eq!(nested.move_count(), 4);
        }
        assert_eq!(guard.move_count(), 3);
    }
    assert_eq!(board, before);
    assert!(board.play(9).is_err());
    assert_eq!(board, before);
}

#[test]
fn test_nested_guards_unwind_in_order() {
    let mut board = board("4");
    let before = board.clone();
    {
        let mut outer = board.play(0).unwrap();
        {
            let mut middle = outer.play(1).unwrap();
            let inner = middle.play(0).unwrap();
            assert_eq!(inner.move_count(), 4);
            assert_eq!(inner.column_height(0), Some(2));
            assert_eq!(inner.cell(0, 1), Some(Player::Second));
        }
        assert_eq!(outer.move_count(), 2);
        assert_eq!(outer.column_height(0), Some(1));
        assert_eq!(outer.column_height(1), Some(0));
        assert_eq!(outer.cell(1, 0), None);
    }
    assert_eq!(board, before);
    // Columns and ownership still agree, so the next move lands normally
    board.make_move(0).unwrap();
    assert_eq!(board.cell(0, 0), Some(Player::Second));
    assert_eq!(board.bitboard(Player::First).bits() & board.bitboard(Player::Second).bits(), 0);
}

#[test]
fn test_undo_accepts_any_column_topped_by_last_mover() {
    // The first player tops columns 0 and 2, so either may be taken back
    let mut board = board("123");
    assert_eq!(board.undo_move(1), Err(BoardError::UndoMismatch(1)));
    board.undo_move(0).unwrap();
    assert_eq!(board.move_count(), 2);
    assert_eq!(board.column_height(0), Some(0));
    assert_eq!(board.column_height(2), Some(1));
}

#[test]
fn test_empty_board_heuristic_is_zero() {
    assert_eq!(Board::new().heuristic_value(), Ok(0));
}

#[test]
fn test_heuristic_uses_cell_weights() {
    // First player at the centre bottom (7), second on top of it (9)
    assert_eq!(board("44").heuristic_value(), Ok(-2));
    assert_eq!(board("4").heuristic_value(), Ok(7));
}

#[test]
fn test_heuristic_rejects_terminal_position() {
    assert_eq!(board("1212121").heuristic_value(), Err(BoardError::Terminal));
}

#[test]
fn test_horizontal_win() {
    let board = board("1122334");
    assert_eq!(board.check_winner(), Some(Player::First));
    assert_eq!(board.terminal_value(), Some(WIN_SCORE));
}

#[test]
fn test_vertical_win() {
    let board = board("1212121");
    assert_eq!(board.check_winner(), Some(Player::First));
}

#[test]
fn test_diagonal_up_win() {
    // First player: (0,0) (1,1) (2,2) (3,3)
    let board = board("12234334544");
    assert_eq!(board.check_winner(), Some(Player::First));
    assert_eq!(
        board.winning_cells(),
        vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 3)]
    );
}

#[test]
fn test_diagonal_down_win() {
    // First player: (3,0) (2,1) (1,2) (0,3)
    let board = board("43321221511");
    assert_eq!(board.check_winner(), Some(Player::First));
}

#[test]
fn test_second_player_win() {
    let board = board("71212121");
    assert_eq!(board.check_winner(), Some(Player::Second));
    assert_eq!(board.terminal_value(), Some(-WIN_SCORE));
}

#[test]
fn test_no_false_positive_on_three() {
    for moves in ["112233", "121212", "1223343", "4332122151"] {
        let board = board(moves);
        assert_eq!(board.check_winner(), None, "sequence {}", moves);
        assert_eq!(board.terminal_value(), None, "sequence {}", moves);
        assert!(board.winning_cells().is_empty());
    }
}

#[test]
fn test_full_board_draw_is_zero() {
    let board = board(DRAWN_GAME);
    assert!(board.is_full());
    assert_eq!(board.check_winner(), None);
    assert_eq!(board.terminal_value(), Some(0));
    assert!((0..WIDTH).all(|c| !board.is_valid(c)));
}

#[test]
fn test_win_dominates_empty_cells() {
    let board = board("1122334");
    assert_eq!(board.move_count(), 7);
    assert_eq!(board.terminal_value(), Some(WIN_SCORE));
}

#[test]
fn test_from_moves_rejects_illegal_sequences() {
    assert_eq!(
        Board::from_moves(&[0, 0, 0, 0, 0, 0, 0]),
        Err(BoardError::IllegalSequence { index: 6, column: 0 })
    );
    // Move after the first player already won
    assert_eq!(
        "12121212".parse::<Board>(),
        Err(BoardError::IllegalSequence { index: 7, column: 1 })
    );
    assert_eq!("1289".parse::<Board>(), Err(BoardError::BadMoveChar('8')));
    assert_eq!(Board::parse_moves("4 4 5"), Ok(vec![3, 3, 4]));
}

#[test]
fn test_display() {
    let board = board("445");
    let expected = concat!(
        " · · · · · · · \n",
        " · · · · · · · \n",
        " · · · · · · · \n",
        " · · · · · · · \n",
        " · · · ○ · · · \n",
        " · · · ● ● · · \n",
        " 1 2 3 4 5 6 7\n",
    );
    assert_eq!(board.to_string(), expected);
}

fn reachable_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0usize..WIDTH, 0..42).prop_map(|columns| {
        let mut board = Board::new();
        for column in columns {
            if board.terminal_value().is_none() && board.is_valid(column) {
                board.make_move(column).unwrap();
            }
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_make_undo_round_trip(board in reachable_board(), column in 0usize..WIDTH) {
        let mut after = board.clone();
        if after.make_move(column).is_ok() {
            prop_assert_eq!(after.move_count(), board.move_count() + 1);
            after.undo_move(column).unwrap();
        }
        prop_assert_eq!(after, board);
    }

    #[test]
    fn prop_heights_match_stone_counts(board in reachable_board()) {
        let first = board.bitboard(Player::First).bits();
        let second = board.bitboard(Player::Second).bits();
        prop_assert_eq!(first & second, 0);
        let total: usize = (0..WIDTH).filter_map(|c| board.column_height(c)).sum();
        prop_assert_eq!(total as u32, board.move_count());
        prop_assert_eq!((first | second).count_ones(), board.move_count());
    }
}
