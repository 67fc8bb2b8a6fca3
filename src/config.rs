//! Player configuration, loadable from TOML

use std::path::Path;

use serde::Deserialize;

use crate::board::{Player, CELL_COUNT};
use crate::engine::DEFAULT_DEPTH;
use crate::error::ConfigError;
use crate::game::{Agent, GameConfig};

/// Deepest search that can still change anything on a 42-cell board
pub const MAX_DEPTH: u32 = CELL_COUNT as u32;

/// Who plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Human,
    Minimax,
}

/// Settings for one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub agent: AgentKind,
    /// Search depth, used when `agent` is minimax
    pub depth: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            agent: AgentKind::Minimax,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl PlayerConfig {
    pub fn agent(self) -> Agent {
        match self.agent {
            AgentKind::Human => Agent::Human,
            AgentKind::Minimax => Agent::Minimax { depth: self.depth },
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, player) in [("first", &self.first), ("second", &self.second)] {
            if player.depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{}.depth must be <= {}",
                    name, MAX_DEPTH
                )));
            }
        }
        Ok(())
    }

    pub fn player(&self, player: Player) -> &PlayerConfig {
        match player {
            Player::First => &self.first,
            Player::Second => &self.second,
        }
    }

    pub fn player_mut(&mut self, player: Player) -> &mut PlayerConfig {
        match player {
            Player::First => &mut self.first,
            Player::Second => &mut self.second,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            agents: [self.first.agent(), self.second.agent()],
        }
    }
}
