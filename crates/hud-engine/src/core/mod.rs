//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application: an init hook run once the window and GPU exist, and a
//! per-frame callback with a consistent context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, InitCtx, WindowCtx};
