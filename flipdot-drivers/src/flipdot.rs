//! Flip-dot panel driver
//!
//! One `FlipdotDisplay` per panel (or per bus, using the broadcast
//! address). The driver owns the serial link, the (address, polarity)
//! pair, and a single pending frame; callers that share one instance
//! across execution contexts must serialize access themselves.

use embedded_hal::delay::DelayNs;
use flipdot_core::FrameBuffer;
use flipdot_protocol::{Frame, BROADCAST_ADDRESS};

use crate::serial::SerialLink;

/// Baud rate the panels ship configured for.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Transport settle time before the first write.
pub const DEFAULT_WARMUP_MS: u32 = 1000;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// Transmit attempted before `begin` succeeded
    NotReady,
    /// The underlying serial link failed
    Transport(E),
}

/// Static configuration of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Panel address; `0xFF` reaches every panel on the bus.
    pub address: u8,
    /// Polarity: when set, a logical 1 rests dot-down instead of
    /// dot-up, applied at serialization time.
    pub inverted: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: BROADCAST_ADDRESS,
            inverted: false,
        }
    }
}

/// Driver for a flip-dot panel on a one-way serial bus.
pub struct FlipdotDisplay<S: SerialLink> {
    link: S,
    address: u8,
    inverted: bool,
    pending: FrameBuffer,
    ready: bool,
}

impl<S: SerialLink> FlipdotDisplay<S> {
    /// Create a driver over an unopened link. Nothing is transmitted
    /// until [`begin`](Self::begin) has run.
    pub fn new(link: S, config: DisplayConfig) -> Self {
        Self {
            link,
            address: config.address,
            inverted: config.inverted,
            pending: FrameBuffer::EMPTY,
            ready: false,
        }
    }

    /// Open the link and let it stabilize before the first write.
    ///
    /// Expected once per display lifetime; the defaults are
    /// [`DEFAULT_BAUD_RATE`] and [`DEFAULT_WARMUP_MS`].
    pub fn begin(
        &mut self,
        baud_rate: u32,
        warmup_ms: u32,
        delay: &mut impl DelayNs,
    ) -> Result<(), DriverError<S::Error>> {
        self.link.open(baud_rate).map_err(DriverError::Transport)?;
        delay.delay_ms(warmup_ms);
        self.ready = true;
        Ok(())
    }

    /// Store `frame` as the pending buffer and, when `auto_update` is
    /// set, transmit it immediately.
    pub fn write(
        &mut self,
        frame: &FrameBuffer,
        auto_update: bool,
    ) -> Result<(), DriverError<S::Error>> {
        self.pending = *frame;
        if auto_update {
            self.update()
        } else {
            Ok(())
        }
    }

    /// Transmit the pending buffer without modifying it.
    pub fn update(&mut self) -> Result<(), DriverError<S::Error>> {
        if !self.ready {
            return Err(DriverError::NotReady);
        }
        let message =
            Frame::new(self.address, *self.pending.columns()).encode_array(self.inverted);
        self.link.write_all(&message).map_err(DriverError::Transport)
    }

    /// Write the all-off frame.
    ///
    /// "Off" is logical zero; the active polarity decides which
    /// physical dot face that is, so the bytes on the wire differ
    /// between polarities while each is that polarity's blank.
    pub fn clear(&mut self) -> Result<(), DriverError<S::Error>> {
        self.write(&FrameBuffer::EMPTY, true)
    }

    /// Change the polarity used by subsequent serializations. Does not
    /// retransmit and does not touch the pending buffer.
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Panel address this driver transmits to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Current polarity.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// True once `begin` has succeeded.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Access the underlying link (capture inspection in tests).
    pub fn link(&self) -> &S {
        &self.link
    }
}
