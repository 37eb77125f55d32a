//! Canvas lifecycle and frame execution.

use std::path::Path;

use anyhow::{Result, anyhow};
use navigator_core::{DrawCommand, Frame, SpriteConfig, WindowConfig};
use sdl2::image::LoadTexture;
use sdl2::render::{BlendMode, Texture, TextureCreator, WindowCanvas};
use sdl2::video::{Window, WindowContext};

use super::convert::{to_sdl_color, to_sdl_point, to_sdl_rect};

/// Build the canvas for `window` and pin its logical size to the configured
/// window size, so resizing scales instead of revealing more world.
pub fn build_canvas(window: Window, config: &WindowConfig) -> Result<WindowCanvas> {
    let mut builder = window.into_canvas().accelerated();
    if config.vsync {
        builder = builder.present_vsync();
    }
    let mut canvas = builder
        .build()
        .map_err(|e| anyhow!("Failed to create canvas: {e}"))?;

    canvas
        .set_logical_size(config.width, config.height)
        .map_err(|e| {
            anyhow!(
                "Failed to set logical size {}x{}: {e}",
                config.width,
                config.height
            )
        })?;

    Ok(canvas)
}

pub fn load_sprite<'t>(
    creator: &'t TextureCreator<WindowContext>,
    sprite: &SpriteConfig,
) -> Result<Texture<'t>> {
    let mut texture = load_texture(creator, &sprite.path)?;
    if sprite.additive {
        texture.set_blend_mode(BlendMode::Add);
    }
    Ok(texture)
}

fn load_texture<'t>(
    creator: &'t TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'t>> {
    creator
        .load_texture(path)
        .map_err(|cause| sprite_load_error(path, cause))
}

/// SDL_image reports failures as bare strings; wrap them so the path leads.
pub fn sprite_load_error(path: &Path, cause: String) -> anyhow::Error {
    anyhow::Error::msg(cause).context(format!("Failed to load sprite {}", path.display()))
}

/// Owns the canvas and the sprite it copies.
pub struct Renderer<'t> {
    canvas: WindowCanvas,
    sprite: Texture<'t>,
    frames: u64,
}

impl<'t> Renderer<'t> {
    pub fn new(canvas: WindowCanvas, sprite: Texture<'t>) -> Self {
        Self {
            canvas,
            sprite,
            frames: 0,
        }
    }

    /// Execute every command in order, then present.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        for command in frame {
            match command {
                DrawCommand::Clear(color) => {
                    self.canvas.set_draw_color(to_sdl_color(*color));
                    self.canvas.clear();
                }
                DrawCommand::Polyline { color, points } => {
                    let points: Vec<sdl2::rect::Point> =
                        points.iter().copied().map(to_sdl_point).collect();
                    self.canvas.set_draw_color(to_sdl_color(*color));
                    self.canvas
                        .draw_lines(points.as_slice())
                        .map_err(|e| anyhow!("Rendering error: {e}"))?;
                }
                DrawCommand::Sprite { dest } => {
                    self.canvas
                        .copy(&self.sprite, None, Some(to_sdl_rect(*dest)))
                        .map_err(|e| anyhow!("Rendering error: {e}"))?;
                }
            }
        }

        self.canvas.present();
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
