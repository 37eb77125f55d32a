//! Navigator Bridge library target.
//!
//! Exposes the front-end modules for integration tests. The binary entry
//! point is in `main.rs`.

pub mod cli;
pub mod gfx;
pub mod shell;
pub mod util;
