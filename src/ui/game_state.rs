//! Game state management for the Connect-Four GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{AgentKind, AppConfig};
use crate::error::{GameError, SearchError};
use crate::{Engine, Game, MoveResult, Player};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, SearchError>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main GUI state
pub struct GameState {
    pub game: Game,
    pub config: AppConfig,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    /// Engines only move while the game is running
    pub is_playing: bool,
    /// `config` was edited while the engine was thinking
    config_pending: bool,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            game: Game::new(config.game_config()),
            config,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            is_playing: false,
            config_pending: false,
            last_ai_result: None,
            message: None,
        }
    }

    /// Clear the board. Agent settings are kept and the game is paused.
    pub fn reset(&mut self) {
        self.game.reset();
        self.ai_state = AiState::Idle;
        self.apply_config();
        self.move_timer = MoveTimer::default();
        self.is_playing = false;
        self.last_ai_result = None;
        self.message = None;
    }

    /// Start (or resume) play with the current agent settings.
    pub fn play(&mut self) {
        if self.game.is_over() {
            self.reset();
        }
        self.game.set_config(self.config.game_config());
        self.is_playing = true;
        self.move_timer.start();
        self.message = None;
    }

    /// Push edited agent settings into the running game. While the engine
    /// is thinking they are held back until its move has been played.
    pub fn apply_config(&mut self) {
        if self.is_ai_thinking() {
            self.config_pending = true;
            return;
        }
        self.game.set_config(self.config.game_config());
        self.config_pending = false;
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Whether the engine should be started this frame
    pub fn needs_ai_move(&self) -> bool {
        self.is_playing && self.game.is_engine_turn() && !self.is_ai_thinking()
    }

    /// Whether a click on the board should drop a coin
    pub fn accepts_clicks(&self) -> bool {
        self.is_playing && self.game.is_human_turn() && !self.is_ai_thinking()
    }

    /// Drop a coin for the human to move.
    pub fn try_play_column(&mut self, column: usize) -> Result<(), String> {
        if !self.is_playing {
            return Err("Press Play to start".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        self.game.play_human(column).map_err(|e| e.to_string())?;
        self.after_move();
        Ok(())
    }

    fn after_move(&mut self) {
        self.message = None;
        if self.game.is_over() {
            self.move_timer.stop();
            self.is_playing = false;
        } else {
            self.move_timer.start();
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.needs_ai_move() {
            return;
        }
        let Some(depth) = self.game.current_agent().depth() else {
            return;
        };

        let board = self.game.board().clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = Engine::with_depth(depth);
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    if self.config_pending {
                        self.apply_config();
                    }
                    return;
                }
            },
            AiState::Idle => return,
        };
        self.ai_state = AiState::Idle;

        let applied = result
            .map_err(GameError::from)
            .and_then(|result| self.game.apply_engine_result(&result).map(|()| result));
        match applied {
            Ok(result) => {
                self.move_timer.ai_thinking_time = Some(result.elapsed);
                self.last_ai_result = Some(result);
                self.after_move();
            }
            Err(e) => {
                log::error!("engine move failed: {}", e);
                self.message = Some(e.to_string());
                self.is_playing = false;
            }
        }
        if self.config_pending {
            self.apply_config();
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back moves until a human is to move again, or a single move
    /// when nobody is human.
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if let Err(e) = self.game.undo() {
            self.message = Some(e.to_string());
            return;
        }
        let any_human = self.game.config().agents.iter().any(|a| a.is_human());
        if any_human {
            while !self.game.moves().is_empty() && !self.game.current_agent().is_human() {
                if self.game.undo().is_err() {
                    break;
                }
            }
        } else {
            self.is_playing = false;
        }
        self.last_ai_result = None;
        self.message = None;
        self.move_timer.start();
    }

    pub fn agent_kind(&self, player: Player) -> AgentKind {
        self.config.player(player).agent
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() {
            assert!(Instant::now() < deadline, "engine did not answer");
            thread::sleep(Duration::from_millis(1));
            state.check_ai_result();
        }
    }

    fn human_vs_engine(depth: u32) -> AppConfig {
        let mut config = AppConfig::default();
        config.first.agent = AgentKind::Human;
        config.second.depth = depth;
        config
    }

    #[test]
    fn test_clicks_need_play() {
        let mut state = GameState::new(human_vs_engine(2));
        assert!(state.try_play_column(3).is_err());
        state.play();
        assert!(state.accepts_clicks());
        state.try_play_column(3).unwrap();
        assert!(state.needs_ai_move());
    }

    #[test]
    fn test_worker_thread_answers() {
        let mut state = GameState::new(human_vs_engine(2));
        state.play();
        state.try_play_column(3).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.game.moves().len(), 2);
        assert!(state.last_ai_result.is_some());
        assert!(state.accepts_clicks());
    }

    #[test]
    fn test_undo_returns_to_human() {
        let mut state = GameState::new(human_vs_engine(1));
        state.play();
        state.try_play_column(0).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        state.undo();
        assert!(state.game.moves().is_empty());
        assert!(state.accepts_clicks());
    }

    #[test]
    fn test_engine_game_runs_to_the_end() {
        let mut config = AppConfig::default();
        config.first.depth = 1;
        config.second.depth = 1;
        let mut state = GameState::new(config);
        state.play();
        while state.needs_ai_move() {
            state.start_ai_thinking();
            wait_for_ai(&mut state);
        }
        assert!(state.game.is_over());
        assert!(!state.is_playing);
        assert_eq!(state.game.moves().len(), 15);
    }

    #[test]
    fn test_settings_changed_while_thinking_take_effect() {
        let mut config = AppConfig::default();
        config.first.depth = 1;
        config.second.depth = 1;
        let mut state = GameState::new(config);
        state.play();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        state.config.second.agent = AgentKind::Human;
        state.apply_config();
        // The running search keeps the old agents
        assert!(!state.game.config().agent(Player::Second).is_human());

        wait_for_ai(&mut state);
        assert_eq!(state.game.moves().len(), 1);
        assert!(state.game.config().agent(Player::Second).is_human());
        assert!(!state.needs_ai_move());
        assert!(state.accepts_clicks());
    }

    #[test]
    fn test_depth_change_applies_when_idle() {
        let mut state = GameState::new(human_vs_engine(2));
        state.config.second.depth = 5;
        state.apply_config();
        assert_eq!(state.game.config().agent(Player::Second).depth(), Some(5));
    }

    #[test]
    fn test_reset_pauses() {
        let mut state = GameState::new(human_vs_engine(2));
        state.play();
        state.try_play_column(3).unwrap();
        state.reset();
        assert!(!state.is_playing);
        assert!(state.game.moves().is_empty());
    }
}
