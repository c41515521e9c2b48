//! Frame encoding for the flip-dot bus.
//!
//! Frame format:
//! - START (1 byte): 0x80 delimiter, outside the 7-bit data range
//! - ADDRESS (1 byte): target panel, 0xFF = broadcast
//! - DATA (7 bytes): one byte per column, bit 0 = top row
//! - CHECKSUM (1 byte): XOR of ADDRESS and all DATA bytes as sent
//!
//! Polarity inversion flips the 7 used bits of each data byte during
//! encoding; the stored frame is never mutated. There is no response
//! path and no acknowledgement on this bus.

use heapless::Vec;

/// Frame start delimiter. Data bytes are masked to 7 bits, so this
/// value can never be forged by column data.
pub const FRAME_START: u8 = 0x80;

/// Address that every panel on the bus accepts.
pub const BROADCAST_ADDRESS: u8 = 0xFF;

/// Column data bytes per frame.
pub const DATA_LEN: usize = 7;

/// Complete frame size (START + ADDRESS + DATA + CHECKSUM)
pub const FRAME_LEN: usize = 1 + 1 + DATA_LEN + 1;

/// Mask of the row bits wired to dots within a data byte.
pub const ROW_MASK: u8 = 0x7F;

/// Errors that can occur during frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireError {
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A constructed frame, ready to serialize under either polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Target panel address
    pub address: u8,
    /// Column data, one byte per column, high bit clear
    pub data: [u8; DATA_LEN],
}

impl Frame {
    /// Create a frame for a single panel.
    ///
    /// The unused high bit of each data byte is cleared.
    pub const fn new(address: u8, data: [u8; DATA_LEN]) -> Self {
        let mut masked = [0u8; DATA_LEN];
        let mut i = 0;
        while i < DATA_LEN {
            masked[i] = data[i] & ROW_MASK;
            i += 1;
        }
        Self {
            address,
            data: masked,
        }
    }

    /// Create a frame addressed to every panel on the bus.
    pub const fn broadcast(data: [u8; DATA_LEN]) -> Self {
        Self::new(BROADCAST_ADDRESS, data)
    }

    /// Calculate the checksum over the bytes as transmitted.
    fn checksum(address: u8, data: &[u8; DATA_LEN]) -> u8 {
        let mut checksum = address;
        for &byte in data {
            checksum ^= byte;
        }
        checksum
    }

    /// Serialize into the fixed 10-byte wire form.
    ///
    /// `inverted` flips the 7 used bits of every data byte; the frame
    /// itself is left untouched.
    pub fn encode_array(&self, inverted: bool) -> [u8; FRAME_LEN] {
        let mut data = self.data;
        if inverted {
            for byte in &mut data {
                *byte = !*byte & ROW_MASK;
            }
        }

        let mut out = [0u8; FRAME_LEN];
        out[0] = FRAME_START;
        out[1] = self.address;
        out[2..2 + DATA_LEN].copy_from_slice(&data);
        out[FRAME_LEN - 1] = Self::checksum(self.address, &data);
        out
    }

    /// Serialize into a caller-provided buffer.
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, inverted: bool, buffer: &mut [u8]) -> Result<usize, WireError> {
        if buffer.len() < FRAME_LEN {
            return Err(WireError::BufferTooSmall);
        }
        buffer[..FRAME_LEN].copy_from_slice(&self.encode_array(inverted));
        Ok(FRAME_LEN)
    }

    /// Serialize into a heapless Vec.
    pub fn encode_to_vec(&self, inverted: bool) -> Vec<u8, FRAME_LEN> {
        let mut vec = Vec::new();
        let _ = vec.extend_from_slice(&self.encode_array(inverted));
        vec
    }
}
