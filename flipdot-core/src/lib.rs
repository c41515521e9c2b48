//! Rendering engine for 7x7 flip-dot displays
//!
//! This crate contains all display logic that does not touch hardware:
//!
//! - `FrameBuffer`: the 7x7 dot-matrix value type
//! - 3x3 micro font and glyph lookup
//! - Frame composition (4-glyph readouts, 2 digits + 3 bar indicators)
//! - Game-of-Life stepping for generative animations
//! - Built-in loading and error patterns
//! - Weather readout formatting
//!
//! Everything here is a pure function over plain values; serialization
//! and transmission live in `flipdot-protocol` and `flipdot-drivers`.

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod frame;
pub mod life;
pub mod patterns;
pub mod render;
pub mod weather;

pub use frame::{FrameBuffer, HEIGHT, ROW_MASK, WIDTH};
pub use render::RenderError;
