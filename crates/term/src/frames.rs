//! Frame iteration: the scrolling camera path as a lazy sequence.

use crate::iso_view::Viewport;

/// Default per-frame scroll: one column left, two rows down.
pub const DEFAULT_STEP: (i32, i32) = (-1, 2);

/// Infinite sequence of viewports, each shifted by a fixed step.
///
/// Cloning restarts from the clone's current position; cap with `take(n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportFrames {
    next: Viewport,
    step_x: i32,
    step_y: i32,
}

impl ViewportFrames {
    pub fn new(start: Viewport) -> Self {
        Self::with_step(start, DEFAULT_STEP.0, DEFAULT_STEP.1)
    }

    pub fn with_step(start: Viewport, step_x: i32, step_y: i32) -> Self {
        Self {
            next: start,
            step_x,
            step_y,
        }
    }

    /// The viewport the next call to `next()` will yield.
    pub fn peek(&self) -> Viewport {
        self.next
    }
}

impl Iterator for ViewportFrames {
    type Item = Viewport;

    fn next(&mut self) -> Option<Viewport> {
        let current = self.next;
        self.next = current.scrolled(self.step_x, self.step_y);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_start() {
        let start = Viewport::new(60, 40).with_offset(5, -5);
        let mut frames = ViewportFrames::new(start);
        assert_eq!(frames.next(), Some(start));
    }

    #[test]
    fn default_step_scrolls_left_and_down() {
        let offsets: Vec<(i32, i32)> = ViewportFrames::new(Viewport::new(10, 10))
            .take(4)
            .map(|vp| (vp.offset_x, vp.offset_y))
            .collect();
        assert_eq!(offsets, vec![(0, 0), (-1, 2), (-2, 4), (-3, 6)]);
    }

    #[test]
    fn clone_restarts_from_same_point() {
        let mut frames = ViewportFrames::with_step(Viewport::new(4, 4), 3, 0);
        frames.next();
        let replay = frames.clone();
        let a: Vec<_> = frames.take(5).collect();
        let b: Vec<_> = replay.take(5).collect();
        assert_eq!(a, b);
        assert_eq!(a[0].offset_x, 3);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut frames = ViewportFrames::with_step(Viewport::new(4, 4), 0, 1);
        assert_eq!(frames.peek().offset_y, 0);
        assert_eq!(frames.peek().offset_y, 0);
        frames.next();
        assert_eq!(frames.peek().offset_y, 1);
    }
}
