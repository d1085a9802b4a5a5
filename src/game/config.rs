use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest accepted `half_extent`
pub const MAX_HALF_EXTENT: i32 = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Largest legal absolute coordinate, one less than the coordinate that kills
    /// the snake. The cube spans `2 * half_extent + 1` cells per axis.
    pub half_extent: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Reroll the fruit when it would land inside the snake
    pub respawn_avoids_body: bool,
    /// Fixed RNG seed for reproducible fruit placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            half_extent: 24,
            initial_snake_length: 3,
            tick_interval_ms: 100,
            respawn_avoids_body: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom cube size
    pub fn new(half_extent: i32) -> Self {
        Self {
            half_extent,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.half_extent < 1 {
            bail!("half_extent must be at least 1, got {}", self.half_extent);
        }
        if self.half_extent > MAX_HALF_EXTENT {
            bail!(
                "half_extent must be at most {}, got {}",
                MAX_HALF_EXTENT,
                self.half_extent
            );
        }
        if self.initial_snake_length < 1 {
            bail!("initial_snake_length must be at least 1");
        }
        // The snake spawns with its head at x = 1 and its tail trailing towards -x
        let tail_x = 2 - self.initial_snake_length as i64;
        if tail_x < -(self.half_extent as i64) {
            bail!(
                "initial_snake_length {} does not fit in a cube of half extent {}",
                self.initial_snake_length,
                self.half_extent
            );
        }
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be positive");
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Number of cells along one edge of the cube
    pub fn edge_length(&self) -> u64 {
        u64::from(self.half_extent.unsigned_abs()) * 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.half_extent, 24);
        assert_eq!(config.edge_length(), 49);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert!(!config.respawn_avoids_body);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(10);
        assert_eq!(config.half_extent, 10);
        assert_eq!(config.initial_snake_length, 3);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(GameConfig::new(0).validate().is_err());

        let mut config = GameConfig::new(5);
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::new(5);
        config.initial_snake_length = 8;
        assert!(config.validate().is_err());

        let mut config = GameConfig::new(5);
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_caps_half_extent() {
        assert!(GameConfig::new(MAX_HALF_EXTENT).validate().is_ok());
        assert!(GameConfig::new(MAX_HALF_EXTENT + 1).validate().is_err());
        assert!(GameConfig::new(i32::MAX / 2 + 1).validate().is_err());
        assert!(GameConfig::new(i32::MAX).validate().is_err());
    }

    #[test]
    fn test_edge_length_does_not_overflow() {
        assert_eq!(GameConfig::new(i32::MAX).edge_length(), 4_294_967_295);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "half_extent": 8, "seed": 7 }"#).unwrap();
        assert_eq!(config.half_extent, 8);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tick_interval_ms, 100);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("snake3d-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "tick_interval_ms": 50, "respawn_avoids_body": true }"#)
            .unwrap();

        let config = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.tick_interval_ms, 50);
        assert!(config.respawn_avoids_body);
        assert_eq!(config.half_extent, 24);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(GameConfig::load(Path::new("/nonexistent/snake3d.json")).is_err());
    }
}
