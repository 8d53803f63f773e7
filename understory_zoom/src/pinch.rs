// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch deltas.
//!
//! Gesture sources typically report one drag delta per event, for whichever
//! finger moved. Summed naively, the deltas of two fingers moving apart cancel
//! out. [`PinchTracker`] reorients each axis of the delta so that movement away
//! from the touch centroid counts as positive (zoom in) and movement towards it
//! as negative (zoom out), independent of which finger produced the event.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_zoom::pinch::PinchTracker;
//!
//! let tracker = PinchTracker::new(100.0).unwrap();
//! let touches = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
//!
//! // The left finger moves further left: the fingers spread.
//! let pinch = tracker
//!     .compute_delta(&touches, Vec2::new(-5.0, 0.0), Point::new(10.0, 0.0))
//!     .unwrap();
//! assert_eq!(pinch.centroid, Point::new(50.0, 0.0));
//! assert!(pinch.scale_delta > 0.0);
//! ```

use kurbo::{Point, Vec2};

use crate::config::ZoomConfig;
use crate::error::{ConfigError, ZoomError};

/// Scale change derived from one drag event of a multi-touch gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchDelta {
    /// Mean of the touch points, in screen space. Zoom about this point.
    pub centroid: Point,
    /// Signed scale change: positive when the fingers spread.
    pub scale_delta: f64,
}

impl PinchDelta {
    /// Scale to apply after this delta, starting from `current`.
    #[must_use]
    pub fn target_scale(&self, current: f64, config: &ZoomConfig) -> f64 {
        config.clamp_scale(current + self.scale_delta)
    }
}

/// Converts multi-touch drag events into pinch scale deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchTracker {
    pixels_per_unit: f64,
}

impl PinchTracker {
    /// Creates a tracker normalizing screen deltas by `pixels_per_unit`.
    ///
    /// `pixels_per_unit` comes from the host's rendering configuration (for
    /// example a canvas' reference pixels per unit); larger values make the
    /// pinch less sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PixelsPerUnit`] unless `pixels_per_unit` is
    /// finite and positive.
    pub fn new(pixels_per_unit: f64) -> Result<Self, ZoomError> {
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(ConfigError::PixelsPerUnit(pixels_per_unit).into());
        }
        Ok(Self { pixels_per_unit })
    }

    /// Computes the centroid and scale delta of one drag event.
    ///
    /// - `touches`: every active touch point, in screen space.
    /// - `drag_delta`: the raw movement reported by the event.
    /// - `event_position`: where the event's finger is, in screen space.
    ///
    /// Returns `None` with fewer than two touches; a single-finger drag is not
    /// a pinch.
    #[must_use]
    pub fn compute_delta(
        &self,
        touches: &[Point],
        drag_delta: Vec2,
        event_position: Point,
    ) -> Option<PinchDelta> {
        if touches.len() < 2 {
            return None;
        }
        let count = touches.len() as f64;
        let sum = touches
            .iter()
            .fold(Vec2::ZERO, |acc, touch| acc + touch.to_vec2());
        let centroid = (sum / count).to_point();

        let mut delta = drag_delta;
        if event_position.x < centroid.x {
            delta.x = -delta.x;
        }
        if event_position.y < centroid.y {
            delta.y = -delta.y;
        }

        Some(PinchDelta {
            centroid,
            scale_delta: (delta.x + delta.y) / count / self.pixels_per_unit,
        })
    }
}
