//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod blit;
mod common;
mod ctx;
mod texture;

pub use blit::BlitRenderer;
pub use ctx::{RenderCtx, RenderTarget};
pub use texture::SurfaceTexture;
