// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Named easing curve mapping an elapsed-time fraction to a value fraction.
///
/// Every curve maps `0.0 → 0.0` and `1.0 → 1.0`. The `Back` family overshoots
/// the `[0, 1]` range in between; consumers that need a bounded value (for
/// example a zoom factor) are expected to clamp the interpolated result.
///
/// All curves are polynomial, so evaluating them needs no floating-point
/// intrinsics and works the same under `std` and `no_std`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic, accelerating from zero velocity.
    InQuad,
    /// Quadratic, decelerating to zero velocity.
    OutQuad,
    /// Quadratic, accelerating until halfway then decelerating.
    InOutQuad,
    /// Cubic, accelerating from zero velocity.
    InCubic,
    /// Cubic, decelerating to zero velocity.
    OutCubic,
    /// Cubic, accelerating until halfway then decelerating.
    InOutCubic,
    /// Quartic, accelerating from zero velocity.
    InQuart,
    /// Quartic, decelerating to zero velocity.
    OutQuart,
    /// Quartic, accelerating until halfway then decelerating.
    InOutQuart,
    /// Quintic, accelerating from zero velocity.
    InQuint,
    /// Quintic, decelerating to zero velocity.
    OutQuint,
    /// Quintic, accelerating until halfway then decelerating.
    InOutQuint,
    /// Pulls back slightly before moving towards the target.
    InBack,
    /// Overshoots the target slightly before settling.
    OutBack,
    /// Pulls back at the start and overshoots at the end.
    InOutBack,
}

const BACK_OVERSHOOT: f64 = 1.70158;
const BACK_OVERSHOOT_IN_OUT: f64 = BACK_OVERSHOOT * 1.525;

impl Ease {
    /// Evaluates the curve at `t`.
    ///
    /// `t` is clamped to `[0, 1]` first; a NaN `t` evaluates as `0.0`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => pow(t, 2),
            Self::OutQuad => 1.0 - pow(1.0 - t, 2),
            Self::InOutQuad => in_out(t, 2),
            Self::InCubic => pow(t, 3),
            Self::OutCubic => 1.0 - pow(1.0 - t, 3),
            Self::InOutCubic => in_out(t, 3),
            Self::InQuart => pow(t, 4),
            Self::OutQuart => 1.0 - pow(1.0 - t, 4),
            Self::InOutQuart => in_out(t, 4),
            Self::InQuint => pow(t, 5),
            Self::OutQuint => 1.0 - pow(1.0 - t, 5),
            Self::InOutQuint => in_out(t, 5),
            Self::InBack => {
                let c1 = BACK_OVERSHOOT;
                (c1 + 1.0) * t * t * t - c1 * t * t
            }
            Self::OutBack => {
                let c1 = BACK_OVERSHOOT;
                let u = t - 1.0;
                1.0 + (c1 + 1.0) * u * u * u + c1 * u * u
            }
            Self::InOutBack => {
                let c2 = BACK_OVERSHOOT_IN_OUT;
                if t < 0.5 {
                    let u = 2.0 * t;
                    (u * u * ((c2 + 1.0) * u - c2)) / 2.0
                } else {
                    let u = 2.0 * t - 2.0;
                    (u * u * ((c2 + 1.0) * u + c2) + 2.0) / 2.0
                }
            }
        }
    }
}

// Symmetric in/out polynomial of degree `n`.
fn in_out(t: f64, n: u32) -> f64 {
    if t < 0.5 {
        // 2^(n-1) * t^n
        pow(2.0, n - 1) * pow(t, n)
    } else {
        1.0 - pow(-2.0 * t + 2.0, n) / 2.0
    }
}

fn pow(base: f64, n: u32) -> f64 {
    let mut acc = 1.0;
    for _ in 0..n {
        acc *= base;
    }
    acc
}
