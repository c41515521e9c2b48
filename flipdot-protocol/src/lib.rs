//! Flip-dot Display Wire Protocol
//!
//! This crate defines the serial protocol between a controller and the
//! flip-dot panels on its bus. The protocol is strictly one-way: the
//! panels never answer, so a successful transmission only means the
//! bytes were handed to the transport.
//!
//! # Protocol Overview
//!
//! Every message is a fixed 10-byte frame:
//! ```text
//! ┌───────┬─────────┬──────────────┬──────────┐
//! │ START │ ADDRESS │ COLUMN DATA  │ CHECKSUM │
//! │ 1B    │ 1B      │ 7B           │ 1B       │
//! └───────┴─────────┴──────────────┴──────────┘
//! ```
//!
//! Address `0xFF` broadcasts to every panel on the bus; any other value
//! addresses exactly one panel. Column data carries one byte per column
//! (bit 0 = top row, 7 row bits used), bit-flipped at serialization
//! time when the panel runs inverted polarity. The checksum is the XOR
//! of the address and the seven data bytes as transmitted.

#![no_std]
#![deny(unsafe_code)]

pub mod wire;

pub use wire::{Frame, WireError, BROADCAST_ADDRESS, DATA_LEN, FRAME_LEN, FRAME_START, ROW_MASK};
