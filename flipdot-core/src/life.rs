//! Game-of-Life stepping
//!
//! Drives the boot animation: seed a pattern, then alternate
//! display-then-step at whatever cadence the caller chooses. The grid
//! has a dead border (no wrap-around) -- on a 7x7 canvas a torus would
//! visibly change even the small classic patterns, so the edge rule is
//! fixed here and tested.

use crate::frame::{FrameBuffer, HEIGHT, WIDTH};

/// Advance a frame one generation.
///
/// Standard rules over the 8-neighborhood: a live cell survives with 2
/// or 3 live neighbors, a dead cell is born with exactly 3. Cells
/// outside the canvas are dead. Pure: the input frame is untouched.
pub fn step(frame: &FrameBuffer) -> FrameBuffer {
    let mut next = FrameBuffer::EMPTY;
    for col in 0..WIDTH {
        for row in 0..HEIGHT {
            let n = live_neighbors(frame, col, row);
            let alive = frame.get(col, row);
            if n == 3 || (alive && n == 2) {
                next.set(col, row, true);
            }
        }
    }
    next
}

fn live_neighbors(frame: &FrameBuffer, col: usize, row: usize) -> u8 {
    let mut count = 0;
    for dc in -1i32..=1 {
        for dr in -1i32..=1 {
            if dc == 0 && dr == 0 {
                continue;
            }
            let c = col as i32 + dc;
            let r = row as i32 + dr;
            // Negative indices fall off the dead border; FrameBuffer
            // already treats the far edges the same way.
            if c >= 0 && r >= 0 && frame.get(c as usize, r as usize) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> FrameBuffer {
        let mut f = FrameBuffer::EMPTY;
        f.set(2, 3, true);
        f.set(3, 3, true);
        f.set(4, 3, true);
        f
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let start = blinker();
        let one = step(&start);
        assert_ne!(one, start);
        // Vertical phase
        assert!(one.get(3, 2));
        assert!(one.get(3, 3));
        assert!(one.get(3, 4));
        assert_eq!(one.lit_dots(), 3);

        let two = step(&one);
        assert_eq!(two, start);
    }

    #[test]
    fn test_block_is_still() {
        let mut block = FrameBuffer::EMPTY;
        block.set(1, 1, true);
        block.set(1, 2, true);
        block.set(2, 1, true);
        block.set(2, 2, true);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut f = FrameBuffer::EMPTY;
        f.set(3, 3, true);
        assert!(step(&f).is_empty());
        assert!(step(&FrameBuffer::EMPTY).is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let start = blinker();
        let copy = start;
        let _ = step(&start);
        assert_eq!(start, copy);
    }

    #[test]
    fn test_corner_blinker_dies_under_dead_border() {
        // A blinker jammed into the corner row loses its oscillation:
        // under a toroidal rule it would keep flipping, so this pins
        // the dead-border behavior.
        let mut f = FrameBuffer::EMPTY;
        f.set(0, 0, true);
        f.set(1, 0, true);
        f.set(2, 0, true);
        let one = step(&f);
        assert!(one.get(1, 0));
        assert!(one.get(1, 1));
        assert!(!one.get(0, 0));
        assert!(!one.get(2, 0));
    }
}
