//! Scene description and frame building.
//!
//! A `Frame` is the ordered list of draw commands for one repaint. Building
//! it is pure, so the exact paint order can be asserted without a display;
//! the bridge just walks the list against an SDL canvas and presents.

use crate::config::{NavigatorConfig, SpriteConfig};
use crate::error::NavigatorResult;
use crate::geometry::{Point, Rect, Rgb};
use crate::terrain::{self, Terrain};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Fill the whole render target.
    Clear(Rgb),
    /// Connected line segments through `points`.
    Polyline { color: Rgb, points: Vec<Point> },
    /// Copy the sprite texture into `dest`.
    Sprite { dest: Rect },
}

pub type Frame = Vec<DrawCommand>;

#[derive(Debug, Clone)]
pub struct Scene {
    pub terrain: Terrain,
    pub sprite: SpriteConfig,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Scene {
    pub fn new(terrain: Terrain, sprite: SpriteConfig) -> Self {
        Self {
            terrain,
            sprite,
            background: Rgb::BLACK,
            foreground: Rgb::WHITE,
        }
    }

    /// Generate terrain across the configured logical width and wrap it in a scene.
    pub fn from_config(config: &NavigatorConfig) -> NavigatorResult<Self> {
        let terrain = terrain::generate(&config.terrain, config.window.logical_width()?)?;
        Ok(Self::new(terrain, config.sprite.clone()))
    }

    pub fn frame(&self) -> Frame {
        let mut frame = Vec::with_capacity(3);
        frame.push(DrawCommand::Clear(self.background));

        // A single vertex has no segment to draw.
        if self.terrain.len() >= 2 {
            frame.push(DrawCommand::Polyline {
                color: self.foreground,
                points: self.terrain.points().to_vec(),
            });
        }

        frame.push(DrawCommand::Sprite {
            dest: self.sprite.dest,
        });
        frame
    }
}
