//! Flip-dot display drivers
//!
//! This crate connects the pure rendering types from `flipdot-core` to
//! real hardware:
//!
//! - `SerialLink`: the write-only serial bus seam
//! - `FlipdotDisplay`: per-panel driver holding the address, polarity,
//!   and pending frame, speaking the `flipdot-protocol` wire format
//!
//! The bus carries no acknowledgements, so every operation here is
//! fire-and-forget: success means the bytes reached the transport.

#![no_std]
#![deny(unsafe_code)]

pub mod flipdot;
pub mod serial;

pub use flipdot::{
    DisplayConfig, DriverError, FlipdotDisplay, DEFAULT_BAUD_RATE, DEFAULT_WARMUP_MS,
};
pub use serial::SerialLink;
