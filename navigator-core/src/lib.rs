//! # Navigator Core
//!
//! Everything Rusty Navigator knows that does not need a window: the terrain
//! generator, the scene and the draw commands it produces, and the config
//! model. The SDL2 front end in `navigator-bridge` only executes what this
//! crate describes.

pub mod action;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod terrain;

pub use action::Action;
pub use config::{NavigatorConfig, SpriteConfig, WindowConfig};
pub use error::{NavigatorError, NavigatorResult};
pub use geometry::{Point, Rect, Rgb};
pub use scene::{DrawCommand, Frame, Scene};
pub use terrain::{Terrain, TerrainConfig};
