// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-interaction gesture state.
//!
//! ## Usage
//!
//! 1) Call [`GestureState::begin`] when the gesture source reports a drag start.
//! 2) On each drag event, call [`GestureState::update`] with the active touch
//!    points and the event's raw delta.
//! 3) Call [`GestureState::end`] when the drag ends; all state is dropped.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_zoom::gesture::GestureState;
//!
//! let mut gesture = GestureState::default();
//! gesture.begin();
//! assert!(gesture.is_active());
//!
//! gesture.update(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], Vec2::new(1.0, 0.0));
//! assert_eq!(gesture.touches().len(), 2);
//! assert_eq!(gesture.last_delta(), Vec2::new(1.0, 0.0));
//!
//! gesture.end();
//! assert!(!gesture.is_active());
//! assert!(gesture.touches().is_empty());
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Touch points, the last drag delta, and whether a gesture is in progress.
#[derive(Clone, Debug, Default)]
pub struct GestureState {
    touches: SmallVec<[Point; 4]>,
    last_delta: Vec2,
    active: bool,
}

impl GestureState {
    /// Starts tracking a new gesture, dropping anything left from the last one.
    pub fn begin(&mut self) {
        self.touches.clear();
        self.last_delta = Vec2::ZERO;
        self.active = true;
    }

    /// Records the touches and raw delta of one drag event.
    ///
    /// Events that arrive without a preceding [`begin`](Self::begin) start the
    /// gesture implicitly; some sources only report drags.
    pub fn update(&mut self, touches: &[Point], delta: Vec2) {
        self.touches.clear();
        self.touches.extend_from_slice(touches);
        self.last_delta = delta;
        self.active = true;
    }

    /// Ends the gesture and resets state.
    pub fn end(&mut self) {
        self.touches.clear();
        self.last_delta = Vec2::ZERO;
        self.active = false;
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Touch points reported by the latest drag event.
    #[must_use]
    pub fn touches(&self) -> &[Point] {
        &self.touches
    }

    /// Raw delta reported by the latest drag event.
    #[must_use]
    pub fn last_delta(&self) -> Vec2 {
        self.last_delta
    }

    /// Returns `true` if the latest event had at least two touches.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.touches.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::GestureState;

    #[test]
    fn new_state_is_idle() {
        let g = GestureState::default();
        assert!(!g.is_active());
        assert!(g.touches().is_empty());
        assert_eq!(g.last_delta(), Vec2::ZERO);
    }

    #[test]
    fn update_replaces_touches() {
        let mut g = GestureState::default();
        g.begin();
        g.update(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)], Vec2::new(1.0, 0.0));
        assert!(g.is_multi_touch());

        g.update(&[Point::new(3.0, 3.0)], Vec2::new(0.0, 2.0));
        assert_eq!(g.touches(), &[Point::new(3.0, 3.0)]);
        assert_eq!(g.last_delta(), Vec2::new(0.0, 2.0));
        assert!(!g.is_multi_touch());
    }

    #[test]
    fn touches_beyond_inline_capacity_are_kept() {
        let mut g = GestureState::default();
        let many: [Point; 6] = core::array::from_fn(|i| Point::new(i as f64, 0.0));
        g.update(&many, Vec2::ZERO);
        assert_eq!(g.touches(), &many);
    }

    #[test]
    fn update_without_begin_starts_gesture() {
        let mut g = GestureState::default();
        g.update(&[Point::ZERO], Vec2::new(1.0, 1.0));
        assert!(g.is_active());
    }

    #[test]
    fn begin_and_end_reset_state() {
        let mut g = GestureState::default();
        g.update(&[Point::ZERO, Point::ZERO], Vec2::new(1.0, 1.0));
        g.begin();
        assert!(g.touches().is_empty());
        assert_eq!(g.last_delta(), Vec2::ZERO);

        g.update(&[Point::ZERO, Point::ZERO], Vec2::new(1.0, 1.0));
        g.end();
        assert!(!g.is_active());
        assert!(g.touches().is_empty());

        // Ending twice is harmless.
        g.end();
        assert!(!g.is_active());
    }
}
