use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

/// Display attributes for the two contestants. The engine never sees these;
/// the UI maps them onto opaque player ids.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            players: PlayersConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        // Classic Connect Four dimensions
        BoardConfig {
            width: 7,
            height: 6,
        }
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig {
                name: "Red".to_string(),
                color: "red".to_string(),
            },
            two: PlayerConfig {
                name: "Yellow".to_string(),
                color: "yellow".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.players.one.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one.name must not be empty".into(),
            ));
        }
        if self.players.two.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two.name must not be empty".into(),
            ));
        }
        if self.players.one.name == self.players.two.name {
            return Err(ConfigError::Validation(
                "players.one.name and players.two.name must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.width, 9);
        // Other fields should be defaults
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players.one.name, "Red");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.width, 7);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.players.two.color, "yellow");
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_height() {
        let mut config = AppConfig::default();
        config.board.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_player_name() {
        let mut config = AppConfig::default();
        config.players.one.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_player_names() {
        let mut config = AppConfig::default();
        config.players.two.name = config.players.one.name.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
width = 5
height = 4

[players.one]
name = "Blue"
color = "blue"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.width, 5);
        assert_eq!(config.board.height, 4);
        assert_eq!(config.players.one.name, "Blue");
        // Others are defaults
        assert_eq!(config.players.two.name, "Yellow");
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
