//! HUD engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo binary:
//! one window, one wgpu context bound to it, font rasterization and a textured
//! quad blitter.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod text;
