// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-facing zoom component.
//!
//! [`ZoomController`] bundles a [`ZoomConfig`], a [`PinchTracker`], a
//! [`ZoomAnimator`] and the per-interaction [`GestureState`] for one surface,
//! and implements the [`ZoomGestures`] capability set a host's event
//! dispatcher calls into.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom::{
//!     AffineProjector, PointerEvent, ZoomConfig, ZoomController, ZoomGestures, ZoomSurface,
//! };
//!
//! let mut surface = ZoomSurface::new(Size::new(800.0, 600.0));
//! let projector = AffineProjector::default();
//! let mut zoom = ZoomController::new(ZoomConfig::default(), 100.0).unwrap();
//!
//! let touches = [Point::new(-100.0, 0.0), Point::new(100.0, 0.0)];
//! let start = PointerEvent::new(Point::new(100.0, 0.0)).with_touches(&touches);
//! zoom.initialize_potential_drag(&start);
//! zoom.begin_drag(&start);
//!
//! // The right finger moves right: the fingers spread and the surface grows.
//! let spread = start.with_delta(Vec2::new(40.0, 0.0));
//! assert!(zoom.drag(&mut surface, &projector, &spread).unwrap());
//! assert!(surface.scale() > 1.0);
//!
//! zoom.end_drag(&spread);
//! ```

use kurbo::{Point, Vec2};
use tracing::debug;

use crate::animator::{AnimatorState, ZoomAnimator};
use crate::config::ZoomConfig;
use crate::error::ZoomError;
use crate::gesture::GestureState;
use crate::mapper::Projector;
use crate::pinch::PinchTracker;
use crate::scale::scale_around;
use crate::surface::ZoomSurface;

/// One pointer/touch event as delivered by the host's gesture source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<'a> {
    /// Screen position of the pointer or finger that produced the event.
    pub position: Point,
    /// Movement since the previous event of the same pointer, in screen units.
    pub delta: Vec2,
    /// Scroll wheel delta; `y` zooms.
    pub scroll_delta: Vec2,
    /// Every active touch point, in screen space.
    pub touches: &'a [Point],
}

impl<'a> PointerEvent<'a> {
    /// Creates an event at `position` with no movement, scroll or touches.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            delta: Vec2::ZERO,
            scroll_delta: Vec2::ZERO,
            touches: &[],
        }
    }

    /// Returns the event with its movement delta set.
    #[must_use]
    pub fn with_delta(self, delta: Vec2) -> Self {
        Self { delta, ..self }
    }

    /// Returns the event with its scroll delta set.
    #[must_use]
    pub fn with_scroll_delta(self, scroll_delta: Vec2) -> Self {
        Self {
            scroll_delta,
            ..self
        }
    }

    /// Returns the event with its active touch points set.
    #[must_use]
    pub fn with_touches(self, touches: &'a [Point]) -> Self {
        Self { touches, ..self }
    }
}

/// Gesture callbacks a zoomable surface responds to.
///
/// The host's event dispatcher calls these in the usual order:
/// `initialize_potential_drag` on press, then `begin_drag`, any number of
/// `drag`, and `end_drag`. `scroll` may arrive at any time.
pub trait ZoomGestures {
    /// A press that may become a drag. Stops any running transition so the
    /// user's finger takes over immediately.
    fn initialize_potential_drag(&mut self, event: &PointerEvent<'_>);

    /// A drag starts.
    fn begin_drag(&mut self, event: &PointerEvent<'_>);

    /// A drag moves. Returns `true` if the event was consumed as a pinch step.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if a pinch step hits a surface
    /// that is [degenerate](ZoomSurface::is_degenerate).
    fn drag(
        &mut self,
        surface: &mut ZoomSurface,
        projector: &dyn Projector,
        event: &PointerEvent<'_>,
    ) -> Result<bool, ZoomError>;

    /// A drag ends.
    fn end_drag(&mut self, event: &PointerEvent<'_>);

    /// A scroll wheel step over the surface.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if the surface is
    /// [degenerate](ZoomSurface::is_degenerate).
    #[cfg(feature = "desktop-input")]
    fn scroll(
        &mut self,
        surface: &mut ZoomSurface,
        projector: &dyn Projector,
        event: &PointerEvent<'_>,
    ) -> Result<(), ZoomError>;
}

/// Zoom behavior for one surface: pinch and scroll gestures plus animated
/// zoom-to-point and zoom-to-center.
#[derive(Clone, Debug)]
pub struct ZoomController {
    config: ZoomConfig,
    pinch: PinchTracker,
    animator: ZoomAnimator,
    gesture: GestureState,
}

impl ZoomController {
    /// Creates a controller.
    ///
    /// `pixels_per_unit` normalizes pinch deltas; see [`PinchTracker::new`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidConfig`] if `pixels_per_unit` is not a
    /// positive finite number.
    pub fn new(config: ZoomConfig, pixels_per_unit: f64) -> Result<Self, ZoomError> {
        Ok(Self {
            config,
            pinch: PinchTracker::new(pixels_per_unit)?,
            animator: ZoomAnimator::new(),
            gesture: GestureState::default(),
        })
    }

    /// The zoom configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// The transition driver.
    #[must_use]
    pub fn animator(&self) -> &ZoomAnimator {
        &self.animator
    }

    /// The current interaction's state.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Stops any running transition. Returns `true` if one was running.
    pub fn cancel(&mut self) -> bool {
        self.animator.cancel()
    }

    /// Animates towards the maximum scale about `screen_point`.
    ///
    /// See [`ZoomAnimator::zoom_to_point`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if the surface is
    /// [degenerate](ZoomSurface::is_degenerate).
    pub fn zoom_to(
        &mut self,
        surface: &ZoomSurface,
        screen_point: Point,
    ) -> Result<bool, ZoomError> {
        self.animator
            .zoom_to_point(surface, screen_point, &self.config)
    }

    /// Animates to the maximum scale while moving `world_position` to
    /// `viewport_center`.
    ///
    /// See [`ZoomAnimator::zoom_to_center`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if the surface is
    /// [degenerate](ZoomSurface::is_degenerate).
    pub fn zoom_to_center<P: Projector + ?Sized>(
        &mut self,
        surface: &mut ZoomSurface,
        world_position: Point,
        projector: &P,
        viewport_center: Point,
    ) -> Result<(), ZoomError> {
        self.animator.zoom_to_center(
            surface,
            world_position,
            &self.config,
            projector,
            viewport_center,
        )
    }

    /// Zooms to center on the surface point under a click at `screen_point`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if the surface is
    /// [degenerate](ZoomSurface::is_degenerate).
    #[cfg(feature = "desktop-input")]
    pub fn zoom_by_click<P: Projector + ?Sized>(
        &mut self,
        surface: &mut ZoomSurface,
        screen_point: Point,
        projector: &P,
        viewport_center: Point,
    ) -> Result<(), ZoomError> {
        let world = projector.screen_to_world(surface, screen_point);
        self.zoom_to_center(surface, world, projector, viewport_center)
    }

    /// Advances the running transition by `dt` seconds.
    ///
    /// See [`ZoomAnimator::advance`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if a zoom-to-point tick finds
    /// the surface without area.
    pub fn advance<P: Projector + ?Sized>(
        &mut self,
        surface: &mut ZoomSurface,
        projector: &P,
        dt: f64,
    ) -> Result<AnimatorState, ZoomError> {
        self.animator.advance(surface, &self.config, projector, dt)
    }
}

impl ZoomGestures for ZoomController {
    fn initialize_potential_drag(&mut self, _event: &PointerEvent<'_>) {
        self.animator.cancel();
    }

    fn begin_drag(&mut self, _event: &PointerEvent<'_>) {
        self.animator.cancel();
        self.gesture.begin();
    }

    fn drag(
        &mut self,
        surface: &mut ZoomSurface,
        projector: &dyn Projector,
        event: &PointerEvent<'_>,
    ) -> Result<bool, ZoomError> {
        self.gesture.update(event.touches, event.delta);
        if !self.gesture.is_multi_touch() {
            return Ok(false);
        }
        let Some(pinch) = self
            .pinch
            .compute_delta(self.gesture.touches(), event.delta, event.position)
        else {
            return Ok(false);
        };
        self.animator.cancel();
        let target = pinch.target_scale(surface.scale(), &self.config);
        scale_around(surface, pinch.centroid, target, &self.config, projector)?;
        debug!(
            touches = self.gesture.touches().len(),
            scale_delta = pinch.scale_delta,
            scale = surface.scale(),
            "pinch step"
        );
        Ok(true)
    }

    fn end_drag(&mut self, _event: &PointerEvent<'_>) {
        self.gesture.end();
    }

    #[cfg(feature = "desktop-input")]
    fn scroll(
        &mut self,
        surface: &mut ZoomSurface,
        projector: &dyn Projector,
        event: &PointerEvent<'_>,
    ) -> Result<(), ZoomError> {
        self.animator.cancel();
        let target = self.config.clamp_scale(surface.scale() + event.scroll_delta.y);
        scale_around(surface, event.position, target, &self.config, projector)?;
        debug!(scroll = event.scroll_delta.y, scale = surface.scale(), "scroll zoom");
        Ok(())
    }
}
