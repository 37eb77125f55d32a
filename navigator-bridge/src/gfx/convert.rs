//! Core geometry → SDL types.

use navigator_core::{Point, Rect, Rgb};
use sdl2::pixels::Color;

pub fn to_sdl_point(p: Point) -> sdl2::rect::Point {
    sdl2::rect::Point::new(p.x, p.y)
}

pub fn to_sdl_rect(r: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(r.x, r.y, r.w, r.h)
}

pub fn to_sdl_color(c: Rgb) -> Color {
    Color::RGB(c.r, c.g, c.b)
}
