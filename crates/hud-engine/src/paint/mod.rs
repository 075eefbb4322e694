//! Paint model shared between the demo and the renderer.

pub mod color;

pub use color::Color;
