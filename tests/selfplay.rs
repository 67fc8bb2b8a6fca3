//! Full engine-versus-engine games through the public API

use connect_four::eval::WIN_SCORE;
use connect_four::{Agent, Board, Engine, Game, GameConfig, Outcome, Player, WIDTH};

fn engines(first: u32, second: u32) -> GameConfig {
    GameConfig {
        agents: [Agent::Minimax { depth: first }, Agent::Minimax { depth: second }],
    }
}

fn play_out(config: GameConfig) -> Game {
    let mut game = Game::new(config);
    while !game.is_over() {
        game.play_engine().unwrap();
        assert!(game.moves().len() <= 42);
    }
    game
}

fn notation(columns: &[usize]) -> String {
    columns.iter().map(|&c| char::from(b'1' + c as u8)).collect()
}

#[test]
fn test_default_depth_game() {
    let game = play_out(engines(8, 8));
    assert_eq!(notation(game.moves()), "443544425555232233342352166666611");
    assert_eq!(game.board().terminal_value(), Some(WIN_SCORE));
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::First)));
}

#[test]
fn test_depth_four_game() {
    let game = play_out(engines(4, 4));
    assert_eq!(notation(game.moves()), "44444423333212232311126766666777775511");
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Second)));
}

#[test]
fn test_uneven_depths_game() {
    let game = play_out(engines(2, 6));
    assert_eq!(notation(game.moves()), "433334444232122421111");
    assert_eq!(game.board().terminal_value(), Some(WIN_SCORE));
    assert_eq!(game.total_stats(Some(Player::Second)).moves, 10);
}

#[test]
fn test_replayed_game_matches_live_board() {
    let game = play_out(engines(3, 3));
    let replayed = Board::from_moves(game.moves()).unwrap();
    assert_eq!(&replayed, game.board());
    assert_eq!(replayed.to_string(), game.board().to_string());
}

#[test]
fn test_search_leaves_every_position_unchanged() {
    let game = play_out(engines(2, 2));
    let mut board = Board::new();
    let mut engine = Engine::with_depth(4);
    for &column in game.moves() {
        let before = board.clone();
        let result = engine.get_move_with_stats(&board).unwrap();
        assert!(result.column < WIDTH);
        assert!(board.is_valid(result.column));
        assert_eq!(board, before);
        board.make_move(column).unwrap();
    }
}
