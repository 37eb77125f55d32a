//! SDL event classification.
//!
//!   Escape    → quit
//!   Quit      → quit (window close, SIGINT)
//!   Exposed   → redraw
//!   Resized   → redraw (logical size rescales the frame)

use navigator_core::Action;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

pub fn classify(event: &Event) -> Action {
    match event {
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        }
        | Event::Quit { .. } => Action::Quit,

        Event::Window {
            win_event: WindowEvent::Exposed | WindowEvent::SizeChanged(..),
            ..
        } => Action::Redraw,

        _ => Action::Ignore,
    }
}
