//! Game setup: who plays and with which color.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::player::{Player, Side};

/// One seat's name and piece color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> PlayerConfig {
        PlayerConfig {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Both seats, seat one first.
///
/// ```
/// use focus_core::GameConfig;
///
/// let config = GameConfig::from_json(
///     r#"{ "players": [
///         { "name": "Ada", "color": "black" },
///         { "name": "Bo", "color": "white" }
///     ] }"#,
/// ).unwrap();
/// assert_eq!(config.players[1].name, "Bo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: [PlayerConfig; 2],
}

impl GameConfig {
    pub fn new(one: PlayerConfig, two: PlayerConfig) -> GameConfig {
        GameConfig { players: [one, two] }
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Names and colors must be non-empty and distinct between seats.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, player) in (1u8..).zip(&self.players) {
            if player.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { seat });
            }
            if player.color.trim().is_empty() {
                return Err(ConfigError::EmptyColor { seat });
            }
        }
        let [one, two] = &self.players;
        if one.name == two.name {
            return Err(ConfigError::DuplicateName(one.name.clone()));
        }
        if one.color == two.color {
            return Err(ConfigError::DuplicateColor(one.color.clone()));
        }
        Ok(())
    }

    /// Fresh players for each seat.
    pub(crate) fn build_players(&self) -> [Player; 2] {
        let seat = |side: Side| {
            let p = &self.players[side.index()];
            Player::new(p.name.as_str(), p.color.as_str())
        };
        [seat(Side::One), seat(Side::Two)]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(
            PlayerConfig::new("PlayerA", "R"),
            PlayerConfig::new("PlayerB", "G"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.players[0], PlayerConfig::new("PlayerA", "R"));
        assert_eq!(config.players[1], PlayerConfig::new("PlayerB", "G"));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig::new(
            PlayerConfig::new("Ada", "black"),
            PlayerConfig::new("Bo", "white"),
        );
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json(r#"{ "players": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let config = GameConfig::new(PlayerConfig::new("Ada", "R"), PlayerConfig::new("Ada", "G"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateName(name)) if name == "Ada"
        ));
    }

    #[test]
    fn test_rejects_duplicate_color() {
        let config = GameConfig::new(PlayerConfig::new("Ada", "R"), PlayerConfig::new("Bo", "R"));
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateColor(_))));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let config = GameConfig::new(PlayerConfig::new("Ada", "R"), PlayerConfig::new("  ", "G"));
        assert!(matches!(config.validate(), Err(ConfigError::EmptyName { seat: 2 })));

        let config = GameConfig::new(PlayerConfig::new("Ada", ""), PlayerConfig::new("Bo", "G"));
        assert!(matches!(config.validate(), Err(ConfigError::EmptyColor { seat: 1 })));
    }

    #[test]
    fn test_build_players() {
        let players = GameConfig::default().build_players();
        assert_eq!(players[0].name(), "PlayerA");
        assert_eq!(players[1].color(), "G");
        assert!(players.iter().all(|p| p.reserve() == 0 && p.captured() == 0));
    }
}
