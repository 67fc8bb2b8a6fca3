//! Game session shared by the GUI and the self-play CLI
//!
//! A [`Game`] owns the live board, who plays each side, the columns played so
//! far (for undo and display only) and timing statistics of engine moves.

use std::time::Duration;

use crate::board::{Board, Cell, Player};
use crate::engine::{Engine, MoveResult, DEFAULT_DEPTH};
use crate::error::{BoardError, GameError};

/// Who chooses the moves of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agent {
    /// Moves come from outside (mouse clicks, tests)
    Human,
    /// Moves come from the alpha-beta engine at the given depth
    Minimax { depth: u32 },
}

impl Agent {
    #[inline]
    pub fn is_human(self) -> bool {
        matches!(self, Agent::Human)
    }

    #[inline]
    pub fn depth(self) -> Option<u32> {
        match self {
            Agent::Human => None,
            Agent::Minimax { depth } => Some(depth),
        }
    }
}

/// Agents for the first and second player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub agents: [Agent; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        let minimax = Agent::Minimax { depth: DEFAULT_DEPTH };
        Self {
            agents: [minimax, minimax],
        }
    }
}

impl GameConfig {
    #[inline]
    pub fn agent(&self, player: Player) -> Agent {
        self.agents[player.index()]
    }
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// Read a terminal value (`+WIN`, `-WIN` or `0`).
    pub fn from_terminal_value(value: i32) -> Self {
        match value.signum() {
            1 => Outcome::Winner(Player::First),
            -1 => Outcome::Winner(Player::Second),
            _ => Outcome::Draw,
        }
    }
}

/// Statistics of one engine move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveStats {
    /// Index of the move in the game (0 = first stone)
    pub ply: usize,
    pub player: Player,
    pub column: usize,
    pub nodes: u64,
    pub evaluations: u64,
    pub elapsed: Duration,
}

/// Evaluations and time summed over a set of engine moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatSummary {
    pub moves: usize,
    pub evaluations: u64,
    pub elapsed: Duration,
}

impl StatSummary {
    /// Evaluations per millisecond. Under a millisecond the raw count is
    /// reported instead.
    pub fn rate(&self) -> f64 {
        let millis = self.elapsed.as_secs_f64() * 1000.0;
        if millis < 1.0 {
            self.evaluations as f64
        } else {
            self.evaluations as f64 / millis
        }
    }

    fn add(&mut self, stats: &MoveStats) {
        self.moves += 1;
        self.evaluations += stats.evaluations;
        self.elapsed += stats.elapsed;
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: GameConfig,
    moves: Vec<usize>,
    stats: Vec<MoveStats>,
    outcome: Option<Outcome>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            config,
            moves: Vec::new(),
            stats: Vec::new(),
            outcome: None,
        }
    }

    /// Continue from a position reached by the given columns.
    pub fn from_moves(config: GameConfig, columns: &[usize]) -> Result<Self, BoardError> {
        let board = Board::from_moves(columns)?;
        let outcome = board.terminal_value().map(Outcome::from_terminal_value);
        Ok(Self {
            board,
            config,
            moves: columns.to_vec(),
            stats: Vec::new(),
            outcome,
        })
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.moves.clear();
        self.stats.clear();
        self.outcome = None;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Agents may be swapped at any point; the position is kept.
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    /// Columns played so far
    #[inline]
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.board.side_to_move()
    }

    #[inline]
    pub fn current_agent(&self) -> Agent {
        self.config.agent(self.side_to_move())
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_agent().is_human()
    }

    pub fn is_engine_turn(&self) -> bool {
        !self.is_over() && !self.current_agent().is_human()
    }

    /// Cell of the most recent stone
    pub fn last_move(&self) -> Option<Cell> {
        let &column = self.moves.last()?;
        let row = self.board.column_height(column)?.checked_sub(1)?;
        Some(Cell::new(column as u8, row as u8))
    }

    /// Cells of the winning four(s), empty unless someone has won
    pub fn winning_cells(&self) -> Vec<Cell> {
        self.board.winning_cells()
    }

    /// Play a column chosen by a human player.
    pub fn play_human(&mut self, column: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.current_agent().is_human() {
            return Err(GameError::NotHumanTurn);
        }
        self.apply(column)
    }

    /// Let the engine choose and play the move for the side to move.
    pub fn play_engine(&mut self) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let Agent::Minimax { depth } = self.current_agent() else {
            return Err(GameError::NotEngineTurn);
        };
        let result = Engine::with_depth(depth).get_move_with_stats(&self.board)?;
        self.apply_engine_result(&result)?;
        Ok(result)
    }

    /// Play a move found by an engine run elsewhere (e.g. on a worker thread).
    pub fn apply_engine_result(&mut self, result: &MoveResult) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let stats = MoveStats {
            ply: self.moves.len(),
            player: self.side_to_move(),
            column: result.column,
            nodes: result.nodes,
            evaluations: result.evaluations,
            elapsed: result.elapsed,
        };
        self.apply(result.column)?;
        self.stats.push(stats);
        Ok(())
    }

    fn apply(&mut self, column: usize) -> Result<(), GameError> {
        self.board.make_move(column)?;
        self.moves.push(column);
        self.outcome = self.board.terminal_value().map(Outcome::from_terminal_value);

        if let Some(outcome) = self.outcome {
            log::info!("game over after {} moves: {:?}", self.moves.len(), outcome);
        }
        Ok(())
    }

    /// Take back the last move, returning its column.
    pub fn undo(&mut self) -> Result<usize, GameError> {
        let &column = self.moves.last().ok_or(BoardError::NothingToUndo)?;
        self.board.undo_move(column)?;
        self.moves.pop();
        if self.stats.last().map(|s| s.ply) == Some(self.moves.len()) {
            self.stats.pop();
        }
        self.outcome = None;
        Ok(column)
    }

    /// Engine move statistics in play order
    #[inline]
    pub fn stats(&self) -> &[MoveStats] {
        &self.stats
    }

    /// Most recent engine move, optionally restricted to one player
    pub fn current_stats(&self, player: Option<Player>) -> Option<&MoveStats> {
        self.stats
            .iter()
            .rev()
            .find(|s| player.map_or(true, |p| s.player == p))
    }

    /// Totals over all engine moves, optionally restricted to one player
    pub fn total_stats(&self, player: Option<Player>) -> StatSummary {
        let mut summary = StatSummary::default();
        for stats in self.stats.iter().filter(|s| player.map_or(true, |p| s.player == p)) {
            summary.add(stats);
        }
        summary
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
