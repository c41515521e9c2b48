//! Built-in frames and loading animations
//!
//! Fixed patterns the clock shows outside normal rendering: an error
//! mark for repeated upstream failures, a link icon to blink while
//! waiting for configuration, a Game-of-Life glider seed for the boot
//! animation, and a minimal sliding-dot loader. The caller owns the
//! cadence; these only produce frames.

use crate::frame::FrameBuffer;

/// Fixed error pattern: a center-column mark shown when data
/// acquisition keeps failing. Written via the ordinary `write` path.
pub const ERROR: FrameBuffer = FrameBuffer::from_columns([0, 0, 0, 0x3A, 0, 0, 0]);

/// Link icon for the configuration wait screen. Blink it by
/// alternating with [`FrameBuffer::EMPTY`].
pub const PAIRING: FrameBuffer = FrameBuffer::from_columns([0, 0, 0x14, 0x3E, 0, 0, 0]);

/// Glider seed for the boot animation: display, step with
/// [`crate::life::step`], repeat. Decays once it reaches the dead
/// border.
pub const GLIDER: FrameBuffer = FrameBuffer::from_columns([0, 0, 0, 0, 0x70, 0x10, 0x20]);

/// Generic loading animation: one dot on the middle row sliding across
/// the three center columns.
///
/// Infinite: `next()` always yields a frame.
#[derive(Debug, Clone)]
pub struct DotLoader {
    phase: u8,
}

impl DotLoader {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }
}

impl Default for DotLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DotLoader {
    type Item = FrameBuffer;

    fn next(&mut self) -> Option<Self::Item> {
        let col = 4 - self.phase as usize;
        self.phase = (self.phase + 1) % 3;
        let mut frame = FrameBuffer::EMPTY;
        frame.set(col, 3, true);
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life;

    #[test]
    fn test_error_pattern_is_center_column() {
        for (i, &col) in ERROR.columns().iter().enumerate() {
            if i == 3 {
                assert_ne!(col, 0);
            } else {
                assert_eq!(col, 0);
            }
        }
    }

    #[test]
    fn test_glider_seed_flies() {
        // Five live cells that stay five for the first generations, the
        // signature of a glider in open space.
        assert_eq!(GLIDER.lit_dots(), 5);
        let one = life::step(&GLIDER);
        assert_eq!(one.lit_dots(), 5);
        assert_ne!(one, GLIDER);
    }

    #[test]
    fn test_pairing_icon_nonempty() {
        assert!(!PAIRING.is_empty());
        assert_eq!(PAIRING.columns()[3], 0x3E);
    }

    #[test]
    fn test_dot_loader_cycles() {
        let mut loader = DotLoader::new();
        let a = loader.next().unwrap();
        let b = loader.next().unwrap();
        let c = loader.next().unwrap();
        let wrapped = loader.next().unwrap();

        for frame in [a, b, c] {
            assert_eq!(frame.lit_dots(), 1);
        }
        assert!(a.get(4, 3));
        assert!(b.get(3, 3));
        assert!(c.get(2, 3));
        assert_eq!(wrapped, a);
    }
}
