//! Time subsystem.
//!
//! `FpsMeter` averages the frame count over a fixed reporting window.

mod fps;

pub use fps::FpsMeter;
