// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: focal-point zoom for rectangular UI surfaces.
//!
//! This crate models a rectangle placed in its parent by a normalized pivot,
//! an anchored position and a uniform scale (the way retained UI trees
//! usually place their nodes), and zooms it so that a chosen screen point
//! stays visually fixed. It focuses on:
//! - Coordinate mapping between screen space and the rect ([`mapper`]).
//! - Pivot re-anchoring: moving the pivot without moving pixels ([`rebase`]).
//! - The re-anchored scale step shared by all inputs ([`scale_around`]).
//! - Two-finger pinch deltas ([`pinch`]).
//! - Animated zoom-to-point and zoom-to-center transitions ([`animator`]).
//!
//! It does **not** own a scene graph, an event loop, a clock or a renderer.
//! Callers are expected to:
//! - Keep the [`ZoomSurface`] values in sync with their own node.
//! - Implement [`Projector`] for their camera/canvas setup, or use
//!   [`AffineProjector`] when screen and parent spaces are related by an
//!   affine transform.
//! - Forward pointer events to a [`ZoomController`] through [`ZoomGestures`].
//! - Call [`ZoomController::advance`] from their frame loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size};
//! use understory_zoom::{AffineProjector, ZoomConfig, ZoomSurface, scale_around};
//!
//! // A 400x300 surface inside a window whose parent space starts at (100, 50).
//! let projector = AffineProjector::new(Affine::translate((100.0, 50.0)));
//! let mut surface = ZoomSurface::new(Size::new(400.0, 300.0));
//! let config = ZoomConfig::new(1.0, 5.0).unwrap();
//!
//! // Zoom to 2x about the pixel under the cursor.
//! let cursor = Point::new(180.0, 90.0);
//! scale_around(&mut surface, cursor, 2.0, &config, &projector).unwrap();
//! assert_eq!(surface.scale(), 2.0);
//! ```
//!
//! ## Animated zoom
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_zoom::{AffineProjector, AnimatorState, ZoomConfig, ZoomController, ZoomSurface};
//!
//! let projector = AffineProjector::default();
//! let mut surface = ZoomSurface::new(Size::new(400.0, 300.0));
//! let mut zoom = ZoomController::new(ZoomConfig::default(), 100.0).unwrap();
//!
//! // Bring the world point (50, 20) to the viewport center at maximum scale.
//! zoom.zoom_to_center(&mut surface, Point::new(50.0, 20.0), &projector, Point::ZERO)
//!     .unwrap();
//! while zoom.advance(&mut surface, &projector, 1.0 / 60.0).unwrap() != AnimatorState::Idle {}
//! assert_eq!(surface.scale(), zoom.config().max_scale());
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and `tracing` with the standard library.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//! - `desktop-input` (default): scroll-wheel zoom ([`ZoomGestures::scroll`])
//!   and click-to-zoom ([`ZoomController::zoom_by_click`]).
//!
//! Diagnostics are emitted through `tracing` at `debug`/`trace` level; this
//! crate never installs a subscriber.
//!
//! This crate is `no_std`.

#![no_std]

pub mod animator;
mod config;
mod controller;
mod error;
pub mod gesture;
pub mod mapper;
pub mod pinch;
pub mod rebase;
mod scale;
mod surface;

pub use animator::{AnimatorState, Transition, TransitionKind, ZoomAnimator};
pub use config::{MIN_CENTER_ZOOM_TIME, ZoomConfig};
pub use controller::{PointerEvent, ZoomController, ZoomGestures};
pub use error::{ConfigError, ZoomError};
pub use mapper::{AffineProjector, Projector};
pub use scale::scale_around;
pub use surface::ZoomSurface;
