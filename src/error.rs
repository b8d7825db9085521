use std::path::PathBuf;

/// Errors surfaced by the game engine.
///
/// A full column is not an error — it is the routine
/// [`MoveOutcome::Rejected`](crate::game::MoveOutcome::Rejected) outcome.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("players must have distinct identifiers")]
    DuplicatePlayer,

    #[error("game is over; create a new game to keep playing")]
    GameOver,
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
    fn test_game_error_display() {
        let err = GameError::InvalidColumn {
            column: 9,
            width: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );

        let err = GameError::InvalidDimension {
            width: 0,
            height: 6,
        };
        assert_eq!(err.to_string(), "board dimensions must be positive, got 0x6");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be > 0"
        );
    }
}
