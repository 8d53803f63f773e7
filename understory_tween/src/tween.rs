// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-boxed interpolation between two values.
//!
//! A [`Tween`] does not own a clock. The host advances it with the time that
//! passed since the previous frame and applies the returned value wherever it
//! belongs (a setter, a field, a property store).
//!
//! ## Minimal example
//!
//! ```
//! use understory_tween::{Ease, Tween};
//!
//! let mut scale = Tween::new(1.0, 3.0, 0.5, Ease::Linear);
//!
//! let step = scale.advance(0.25);
//! assert_eq!(step.value, 2.0);
//! assert!(!step.finished);
//!
//! let step = scale.advance(0.25);
//! assert_eq!(step.value, 3.0);
//! assert!(step.finished);
//! ```

use kurbo::{Point, Vec2};

use crate::Ease;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// Interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    #[must_use]
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::lerp(self, other, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::lerp(self, other, t)
    }
}

/// Value produced by one [`Tween::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep<T> {
    /// Interpolated value after the step.
    pub value: T,
    /// `true` once elapsed time has reached the duration.
    ///
    /// On the finishing step `value` is exactly the tween's target.
    pub finished: bool,
}

/// Interpolation of a single value from a start to a target over a duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    start: T,
    target: T,
    duration: f64,
    elapsed: f64,
    ease: Ease,
    stepped: bool,
}

impl<T: Lerp> Tween<T> {
    /// Creates a tween from `start` to `target` lasting `duration` seconds.
    ///
    /// A negative or NaN duration is treated as zero, so the first
    /// [`advance`](Self::advance) finishes the tween. An infinite duration
    /// never finishes and holds the start value.
    #[must_use]
    pub fn new(start: T, target: T, duration: f64, ease: Ease) -> Self {
        let duration = if duration > 0.0 { duration } else { 0.0 };
        Self {
            start,
            target,
            duration,
            elapsed: 0.0,
            ease,
            stepped: false,
        }
    }

    /// Start value.
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time advanced so far, never more than [`duration`](Self::duration).
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Ease curve applied to the time fraction.
    #[must_use]
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Linear time fraction in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else if self.stepped {
            1.0
        } else {
            0.0
        }
    }

    /// Returns `true` once the full duration has been advanced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stepped && self.elapsed >= self.duration
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            self.target
        } else {
            self.start.lerp(self.target, self.ease.apply(self.progress()))
        }
    }

    /// Advances the tween by `dt` seconds and returns the new value.
    ///
    /// Negative or NaN `dt` counts as no time, but the call still counts as a
    /// step: a zero-duration tween finishes on its first call.
    pub fn advance(&mut self, dt: f64) -> TweenStep<T> {
        let dt = if dt.is_nan() { 0.0 } else { dt.max(0.0) };
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.stepped = true;
        TweenStep {
            value: self.value(),
            finished: self.is_finished(),
        }
    }
}
