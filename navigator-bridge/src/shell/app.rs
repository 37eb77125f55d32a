// navigator-bridge/src/shell/app.rs
//! SDL bootstrap and the blocking event loop.
//!
//! Startup order matters: the SDL_image context must outlive every texture,
//! and the texture creator must outlive the sprite the renderer holds.

use anyhow::{Context, Result, anyhow};
use navigator_core::{Action, NavigatorConfig, Scene};
use sdl2::image::InitFlag;

use super::events;
use crate::gfx::{self, Renderer};

pub fn run(config: NavigatorConfig, debug: bool) -> Result<()> {
    let sdl_context = sdl2::init().map_err(|e| anyhow!("Failed to init SDL: {e}"))?;
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(|e| anyhow!("Failed to obtain event pump: {e}"))?;
    let video = sdl_context
        .video()
        .map_err(|e| anyhow!("Failed to init video subsystem: {e}"))?;
    let _image_context =
        sdl2::image::init(InitFlag::PNG).map_err(|e| anyhow!("Failed to init SDL_image: {e}"))?;

    let mut window_builder = video.window(
        &config.window.title,
        config.window.width,
        config.window.height,
    );
    window_builder.position_centered();
    if config.window.resizable {
        window_builder.resizable();
    }
    let window = window_builder
        .build()
        .map_err(|e| anyhow!("Failed to create window: {e}"))?;

    let canvas = gfx::build_canvas(window, &config.window)?;
    let texture_creator = canvas.texture_creator();
    let sprite = gfx::load_sprite(&texture_creator, &config.sprite)?;
    let mut renderer = Renderer::new(canvas, sprite);

    let scene = Scene::from_config(&config).context("Failed to build scene")?;
    let frame = scene.frame();

    tracing::info!(
        title = %config.window.title,
        width = config.window.width,
        height = config.window.height,
        vertices = scene.terrain.len(),
        sprite = %config.sprite.path.display(),
        "navigator ready"
    );

    for event in event_pump.wait_iter() {
        if debug {
            tracing::debug!(?event, "event");
        }

        match events::classify(&event) {
            Action::Quit => {
                tracing::info!("quit requested");
                break;
            }
            Action::Redraw => {
                if debug {
                    tracing::debug!("rendering");
                }
                renderer.draw(&frame)?;
            }
            Action::Ignore => {}
        }
    }

    tracing::info!(frames = renderer.frames(), "navigator shut down");
    Ok(())
}
