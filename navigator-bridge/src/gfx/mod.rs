//! Rendering Subsystem.
//!
//! Sub-modules:
//!   renderer — canvas setup, sprite loading, frame execution
//!   convert  — core geometry to SDL rect/point/color

pub mod convert;
mod renderer;

pub use renderer::{Renderer, build_canvas, load_sprite, sprite_load_error};
