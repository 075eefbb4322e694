//! Font loading and text rasterization.
//!
//! Text is rasterized on the CPU with `fontdue` into a coverage
//! [`TextSurface`]; the render module turns a surface into a GPU texture.

mod font;
mod surface;
mod system;

pub use font::{Font, FontLoadError, RasterizeError, MAX_FONT_SIZE, MAX_SURFACE_DIMENSION};
pub use surface::{RenderMode, TextSurface};
pub use system::{find_system_font, SYSTEM_FONT_CANDIDATES};
