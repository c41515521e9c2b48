//! Serial link abstraction
//!
//! The flip-dot bus is write-only; there is no read path to model.

/// Byte-oriented serial channel to the display bus.
///
/// Implementations wrap a UART (or a capture buffer in tests). The
/// driver calls `open` once during `begin` and `write_all` per frame.
pub trait SerialLink {
    type Error;

    /// Open the channel at the given baud rate.
    fn open(&mut self, baud_rate: u32) -> Result<(), Self::Error>;

    /// Write all bytes, blocking until they are handed to the
    /// transport. Return does not imply any panel rendered them.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}
