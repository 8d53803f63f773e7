// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tween --heading-base-level=0

//! Understory Tween: host-agnostic value interpolation.
//!
//! This crate provides the small pieces a UI runtime needs to animate a value
//! from where it is to where it should be:
//! - [`Ease`]: named easing curves mapping a time fraction to a value fraction.
//! - [`Lerp`]: linear interpolation for `f64`, [`kurbo::Point`] and
//!   [`kurbo::Vec2`].
//! - [`Tween`]: a start value, a target value, a duration and an ease, advanced
//!   by the host with frame deltas.
//!
//! It does **not** own a clock, a frame loop or a registry of running
//! animations. Callers keep their tweens next to the state they animate and
//! advance them from whatever frame callback they already have.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_tween::{Ease, Tween};
//!
//! let mut position = Tween::new(Point::ZERO, Point::new(100.0, 50.0), 0.3, Ease::OutCubic);
//!
//! // Called once per frame with the frame delta in seconds.
//! let step = position.advance(1.0 / 60.0);
//! assert!(!step.finished);
//! assert!(step.value.x > 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod ease;
mod tween;

pub use ease::Ease;
pub use tween::{Lerp, Tween, TweenStep};
