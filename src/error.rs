//! Error types for the board, search, game session and configuration

use std::path::PathBuf;

/// Violations of the board's move/undo/evaluate contracts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range (expected 0..7)")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("no move to undo on an empty board")]
    NothingToUndo,

    #[error("top stone of column {0} was not placed by the last mover")]
    UndoMismatch(usize),

    #[error("position is terminal")]
    Terminal,

    #[error("illegal move {index} (column {column}) in sequence")]
    IllegalSequence { index: usize, column: usize },

    #[error("invalid move character {0:?} (expected 1-7)")]
    BadMoveChar(char),
}

/// Errors raised by the search driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("game is already over")]
    GameOver,
}

/// Errors raised by a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("it is not an engine player's turn")]
    NotEngineTurn,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        assert_eq!(BoardError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            BoardError::IllegalSequence { index: 6, column: 0 }.to_string(),
            "illegal move 6 (column 0) in sequence"
        );
    }

    #[test]
    fn test_game_error_is_transparent() {
        let err = GameError::from(BoardError::ColumnOutOfRange(9));
        assert_eq!(err.to_string(), "column 9 is out of range (expected 0..7)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("first.depth must be <= 42".to_string());
        assert_eq!(err.to_string(), "config validation error: first.depth must be <= 42");
    }
}
