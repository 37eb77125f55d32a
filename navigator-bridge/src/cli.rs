//! Command-line surface.
//!
//! Flags override whatever the config file says.

use std::path::PathBuf;

use clap::Parser;
use navigator_core::{NavigatorConfig, NavigatorResult};

#[derive(Parser, Debug, Default)]
#[command(name = "rusty-navigator", version, about = "Fly a helicopter over a seeded skyline")]
pub struct Cli {
    /// Debug (show events)
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// JSON config file; defaults to the platform config dir.
    #[arg(short, long, env = "NAVIGATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Sprite PNG to draw instead of the configured one.
    #[arg(long)]
    pub sprite: Option<PathBuf>,

    /// Terrain seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn apply(&self, config: &mut NavigatorConfig) {
        if let Some(sprite) = &self.sprite {
            config.sprite.path = sprite.clone();
        }
        if let Some(seed) = self.seed {
            config.terrain.seed = seed;
        }
    }

    /// Discover the config file, then layer the flags on top.
    pub fn resolve_config(&self) -> NavigatorResult<NavigatorConfig> {
        let mut config = NavigatorConfig::discover(self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }
}
