//! Application Shell — SDL lifecycle and event dispatch.
//!
//! The shell owns the SDL context and the blocking event loop. It turns
//! platform events into `Action`s and asks the renderer to repaint.

pub(crate) mod app;
pub mod events;

pub use app::run;
