//! Pointer-to-segment state machine.
//!
//! The tracker is either idle or mid-stroke. A press arms it with the down
//! position; every move or release afterwards yields exactly one segment
//! from the previous point. Moves and releases while idle yield nothing, so
//! a drag that started outside the canvas never paints.

use egui::Pos2;

/// One straight piece of a stroke, from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Pos2,
    pub end: Pos2,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    last_point: Option<Pos2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.last_point.is_some()
    }

    /// Pointer went down: start a stroke. No pixels are drawn yet.
    pub fn press(&mut self, pos: Pos2) {
        self.last_point = Some(pos);
    }

    /// Pointer moved. Mid-stroke this yields the segment from the previous
    /// point and advances to `pos`.
    pub fn drag(&mut self, pos: Pos2) -> Option<Segment> {
        let start = self.last_point?;
        self.last_point = Some(pos);
        Some(Segment { start, end: pos })
    }

    /// Pointer went up. Mid-stroke this yields the final segment and returns
    /// the tracker to idle.
    pub fn release(&mut self, pos: Pos2) -> Option<Segment> {
        let start = self.last_point.take()?;
        Some(Segment { start, end: pos })
    }

    /// Abandon any stroke in progress (pointer left the window, tool switch).
    pub fn cancel(&mut self) {
        self.last_point = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Pos2 {
        Pos2::new(x, y)
    }

    #[test]
    fn press_alone_draws_nothing() {
        let mut tracker = PointerTracker::new();
        tracker.press(p(1.0, 1.0));
        assert!(tracker.is_drawing());
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.drag(p(5.0, 5.0)), None);
        assert_eq!(tracker.release(p(5.0, 5.0)), None);
    }

    #[test]
    fn each_drag_yields_one_segment_from_the_previous_point() {
        let mut tracker = PointerTracker::new();
        tracker.press(p(0.0, 0.0));
        assert_eq!(
            tracker.drag(p(1.0, 0.0)),
            Some(Segment { start: p(0.0, 0.0), end: p(1.0, 0.0) })
        );
        assert_eq!(
            tracker.drag(p(2.0, 1.0)),
            Some(Segment { start: p(1.0, 0.0), end: p(2.0, 1.0) })
        );
    }

    #[test]
    fn release_yields_the_final_segment_and_goes_idle() {
        let mut tracker = PointerTracker::new();
        tracker.press(p(0.0, 0.0));
        tracker.drag(p(3.0, 3.0));
        let last = tracker.release(p(4.0, 5.0)).unwrap();
        assert_eq!(last.end, p(4.0, 5.0));
        assert!(!tracker.is_drawing());
        // A stray second release is a no-op.
        assert_eq!(tracker.release(p(9.0, 9.0)), None);
    }

    #[test]
    fn cancel_discards_the_stroke() {
        let mut tracker = PointerTracker::new();
        tracker.press(p(0.0, 0.0));
        tracker.cancel();
        assert_eq!(tracker.drag(p(1.0, 1.0)), None);
    }
}
