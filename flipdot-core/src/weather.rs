//! Weather readout composition
//!
//! Turns the values the weather provider hands over into the standard
//! clock face: two stacked temperature digits, three bars, and the
//! sign marker. Acquisition and parsing happen elsewhere; this module
//! only formats and composes.

use heapless::String;

use crate::frame::FrameBuffer;
use crate::render;

/// One render cycle's worth of weather data.
///
/// The fractions arrive in `[0, 1]` from the provider and are clamped
/// again by the bar mapping regardless.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherReadout {
    /// Current temperature in whole degrees.
    pub temperature_c: i16,
    /// Max precipitation probability over the forecast lookahead.
    pub precipitation: f32,
    /// Relative humidity fraction.
    pub humidity: f32,
    /// Visibility fraction.
    pub visibility: f32,
}

impl WeatherReadout {
    /// Compose the readout frame: temperature digits in the left
    /// column stack, bars ordered precipitation, humidity, visibility,
    /// sign marker lit for sub-zero temperatures.
    pub fn to_frame(&self) -> FrameBuffer {
        let text = format_temperature(self.temperature_c);
        render::digits_and_bars(
            &text,
            [self.precipitation, self.humidity, self.visibility],
            self.temperature_c < 0,
        )
        .unwrap_or_default()
    }
}

/// Format a temperature magnitude as exactly two characters,
/// left-space-padded below 10. Magnitudes above 99 clamp to 99; the
/// sign travels separately as the marker dot.
pub fn format_temperature(temperature_c: i16) -> String<2> {
    let magnitude = temperature_c.unsigned_abs().min(99) as u8;
    let mut text = String::new();
    if magnitude >= 10 {
        let _ = text.push((b'0' + magnitude / 10) as char);
    } else {
        let _ = text.push(' ');
    }
    let _ = text.push((b'0' + magnitude % 10) as char);
    text
}
