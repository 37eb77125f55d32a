//! Configuration model and discovery.
//!
//! Config lives in a JSON file. Every section carries serde defaults, so a
//! file only needs the keys it wants to change. Lookup order:
//!   1. an explicit path (must exist)
//!   2. `<platform config dir>/config.json`, if present
//!   3. built-in defaults

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{NavigatorError, NavigatorResult};
use crate::geometry::Rect;
use crate::terrain::TerrainConfig;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_TITLE: &str = "Rusty Navigator";
pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 640;
pub const DEFAULT_SPRITE_PATH: &str = "data/heli.png";
pub const DEFAULT_SPRITE_DEST: Rect = Rect::new(10, 200, 64, 24);
pub const MAX_WINDOW_DIM: u32 = i32::MAX as u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Window width, also used as the logical render width.
    pub width: u32,
    /// Window height, also used as the logical render height.
    pub height: u32,
    pub resizable: bool,
    pub vsync: bool,
}

impl WindowConfig {
    /// Logical width in the signed space terrain and SDL coordinates use.
    pub fn logical_width(&self) -> NavigatorResult<i32> {
        i32::try_from(self.width).map_err(|_| {
            NavigatorError::InvalidConfig(format!(
                "window width must not exceed {MAX_WINDOW_DIM}, got {}",
                self.width
            ))
        })
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            resizable: true,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// PNG file, resolved against the working directory when relative.
    pub path: PathBuf,
    pub dest: Rect,
    /// Additive blending, so the sprite's black background drops out.
    pub additive: bool,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SPRITE_PATH),
            dest: DEFAULT_SPRITE_DEST,
            additive: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub window: WindowConfig,
    pub terrain: TerrainConfig,
    pub sprite: SpriteConfig,
}

impl NavigatorConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> NavigatorResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| NavigatorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| NavigatorError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Resolve the config to use. An explicit path must exist; otherwise the
    /// platform config file is used when present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> NavigatorResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> NavigatorResult<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(NavigatorError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        // SDL takes signed window dimensions.
        if self.window.width > MAX_WINDOW_DIM || self.window.height > MAX_WINDOW_DIM {
            return Err(NavigatorError::InvalidConfig(format!(
                "window size must not exceed {MAX_WINDOW_DIM}, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.window.title.trim().is_empty() {
            return Err(NavigatorError::InvalidConfig(
                "window title must not be empty".to_string(),
            ));
        }
        if self.sprite.dest.is_empty() {
            return Err(NavigatorError::InvalidConfig(format!(
                "sprite destination must be non-zero, got {}x{}",
                self.sprite.dest.w, self.sprite.dest.h
            )));
        }
        self.terrain.validate()
    }
}

/// `<config dir>/config.json` for this platform, if a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rusty-navigator")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
