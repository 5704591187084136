//! Sandbox configuration
//!
//! Loaded from a TOML file where every field is optional:
//!
//! ```toml
//! tile_size = 32
//! save_path = "world_save.json"
//! hotbar = ["dirt", "grass", "stone", "wood"]
//!
//! [screen]
//! width = 960
//! height = 640
//!
//! [physics]
//! gravity = 1800.0
//!
//! [input]
//! jump = ["w", "space"]
//! ```
//!
//! `BLOCKYARD_SAVE_PATH` in the environment overrides `save_path`.

use blockyard_core::{BlockyardError, Result, Vec2};
use blockyard_physics::{Arena, PhysicsConfig};
use blockyard_runtime::InputConfig;
use blockyard_world::{BlockKind, DEFAULT_SAVE_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the save location
pub const SAVE_PATH_ENV: &str = "BLOCKYARD_SAVE_PATH";

/// Window size in pixels. The grid covers the whole window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 640,
        }
    }
}

/// Player box size in pixels. Unset dimensions follow the tile size.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Edge length of one cell in pixels
    pub tile_size: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    pub save_path: PathBuf,
    /// Blocks offered for placement, in slot order
    pub hotbar: Vec<BlockKind>,
    pub screen: ScreenConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    /// Overrides for individual actions; the rest keep their defaults
    pub input: InputConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            tile_size: 32,
            tick_rate: 60,
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            hotbar: vec![
                BlockKind::Dirt,
                BlockKind::Grass,
                BlockKind::Stone,
                BlockKind::Wood,
            ],
            screen: ScreenConfig::default(),
            physics: PhysicsConfig::default(),
            player: PlayerConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl SandboxConfig {
    /// Read, parse and validate a config file, then apply environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content).map_err(|e| match e {
            BlockyardError::TomlParseError(msg) => BlockyardError::TomlParseError(format!(
                "Failed to parse config {}: {}",
                path.display(),
                msg
            )),
            other => other,
        })?;
        config.apply_env_overrides();
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: SandboxConfig = toml::from_str(content)?;
        config.input = config.input.merged_with_defaults();
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(BlockyardError::InvalidConfig(
                "tile_size must be positive".to_string(),
            ));
        }
        if self.tick_rate == 0 {
            return Err(BlockyardError::InvalidConfig(
                "tick_rate must be positive".to_string(),
            ));
        }
        if self.hotbar.is_empty() {
            return Err(BlockyardError::InvalidConfig(
                "hotbar needs at least one block".to_string(),
            ));
        }
        if self.hotbar.contains(&BlockKind::Air) {
            return Err(BlockyardError::InvalidConfig(
                "air cannot be placed from the hotbar".to_string(),
            ));
        }
        let (w, h) = self.grid_size();
        if w == 0 || h == 0 {
            return Err(BlockyardError::InvalidConfig(format!(
                "screen {}x{} is smaller than one {}px tile",
                self.screen.width, self.screen.height, self.tile_size
            )));
        }
        let size = self.player_size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(BlockyardError::InvalidConfig(
                "player size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(SAVE_PATH_ENV) {
            if !path.is_empty() {
                self.save_path = PathBuf::from(path);
            }
        }
    }

    pub fn tile(&self) -> f32 {
        self.tile_size as f32
    }

    /// Grid dimensions in cells
    pub fn grid_size(&self) -> (usize, usize) {
        if self.tile_size == 0 {
            return (0, 0);
        }
        (
            (self.screen.width / self.tile_size) as usize,
            (self.screen.height / self.tile_size) as usize,
        )
    }

    pub fn player_size(&self) -> Vec2 {
        let tile = self.tile();
        Vec2::new(
            self.player.width.unwrap_or(tile - 4.0),
            self.player.height.unwrap_or(tile * 1.8),
        )
    }

    pub fn arena(&self) -> Arena {
        Arena::new(
            self.tile(),
            self.screen.width as f32,
            self.screen.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockyard_runtime::{actions, Binding, Key};

    #[test]
    fn defaults_describe_the_classic_sandbox() {
        let config = SandboxConfig::default();
        config.validate().unwrap();
        assert_eq!(config.grid_size(), (30, 20));
        assert_eq!(config.player_size(), Vec2::new(28.0, 57.6));
        assert_eq!(config.save_path, PathBuf::from("world_save.json"));
        assert_eq!(config.hotbar.len(), 4);
        assert_eq!(config.arena(), Arena::new(32.0, 960.0, 640.0));
    }

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(SandboxConfig::from_toml_str("").unwrap(), SandboxConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = SandboxConfig::from_toml_str(
            r#"
            tile_size = 16
            hotbar = ["stone", "wood"]

            [physics]
            walk_speed = 90.0

            [input]
            jump = ["space"]
            "#,
        )
        .unwrap();
        assert_eq!(config.tile_size, 16);
        assert_eq!(config.grid_size(), (60, 40));
        // player follows the tile size when not set explicitly
        assert_eq!(config.player_size(), Vec2::new(12.0, 16.0 * 1.8));
        assert_eq!(config.hotbar, vec![BlockKind::Stone, BlockKind::Wood]);
        assert_eq!(config.physics.walk_speed, 90.0);
        assert_eq!(config.physics.gravity, 1800.0);
        assert_eq!(config.input.bindings(actions::JUMP), &[Binding::key(Key::Space)]);
        assert_eq!(
            config.input.bindings(actions::SAVE),
            &[Binding::ctrl(Key::S)]
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        for doc in [
            "tile_size = 0",
            "tick_rate = 0",
            "hotbar = []",
            r#"hotbar = ["air"]"#,
            "[screen]\nwidth = 10",
            "[player]\nwidth = -1.0",
        ] {
            assert!(
                matches!(
                    SandboxConfig::from_toml_str(doc),
                    Err(BlockyardError::InvalidConfig(_))
                ),
                "{doc:?}"
            );
        }
    }

    #[test]
    fn unknown_block_names_fail_to_parse() {
        let err = SandboxConfig::from_toml_str(r#"hotbar = ["lava"]"#).unwrap_err();
        assert!(matches!(err, BlockyardError::TomlParseError(_)));
    }

    #[test]
    fn printed_config_parses_back() {
        let config = SandboxConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("tile_size = 32"));
        assert_eq!(SandboxConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blockyard.toml");
        std::fs::write(&path, "tick_rate = 30\n").unwrap();
        let config = SandboxConfig::load(&path).unwrap();
        assert_eq!(config.tick_rate, 30);

        let missing = SandboxConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(BlockyardError::IoError(_))));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "tile_size = \"big\"").unwrap();
        let err = SandboxConfig::load(&path).unwrap_err().to_string();
        assert!(err.contains("broken.toml"), "{err}");
    }

    #[test]
    fn save_path_env_overrides_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blockyard.toml");
        std::fs::write(&path, "save_path = \"from_file.json\"\n").unwrap();
        let previous = std::env::var_os(SAVE_PATH_ENV);

        let target = dir.path().join("from_env.json");
        std::env::set_var(SAVE_PATH_ENV, &target);
        let overridden = SandboxConfig::load(&path).unwrap();

        // an empty value is treated as unset
        std::env::set_var(SAVE_PATH_ENV, "");
        let kept = SandboxConfig::load(&path).unwrap();

        match previous {
            Some(value) => std::env::set_var(SAVE_PATH_ENV, value),
            None => std::env::remove_var(SAVE_PATH_ENV),
        }
        assert_eq!(overridden.save_path, target);
        assert_eq!(kept.save_path, PathBuf::from("from_file.json"));
    }
}
