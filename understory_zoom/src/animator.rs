// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated zoom transitions.
//!
//! [`ZoomAnimator`] runs at most one [`Transition`] for the surface it is paired
//! with. Starting a transition replaces the running one; the surface keeps
//! whatever values the last tick wrote, and the new transition starts from
//! there.
//!
//! The animator does not own a clock. The host calls
//! [`ZoomAnimator::advance`] from its frame loop with the frame delta:
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_zoom::animator::{AnimatorState, ZoomAnimator};
//! use understory_zoom::{AffineProjector, ZoomConfig, ZoomSurface};
//!
//! let config = ZoomConfig::new(1.0, 5.0).unwrap();
//! let projector = AffineProjector::default();
//! let mut surface = ZoomSurface::new(Size::new(400.0, 300.0)).with_scale(3.0);
//! let mut animator = ZoomAnimator::new();
//!
//! assert!(animator.zoom_to_point(&surface, Point::new(50.0, 20.0), &config).unwrap());
//! assert_eq!(animator.state(), AnimatorState::ScaleOnlyRunning);
//!
//! while animator.advance(&mut surface, &config, &projector, 1.0 / 60.0).unwrap()
//!     != AnimatorState::Idle
//! {}
//! assert_eq!(surface.scale(), 5.0);
//! ```

use kurbo::Point;
use tracing::{debug, trace, warn};
use understory_tween::Tween;

use crate::config::ZoomConfig;
use crate::error::ZoomError;
use crate::mapper::Projector;
use crate::scale::scale_around;
use crate::surface::ZoomSurface;

/// What the animator is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AnimatorState {
    /// No transition is running.
    #[default]
    Idle,
    /// A zoom-to-point transition is re-anchoring the scale every tick.
    ScaleOnlyRunning,
    /// A zoom-to-center transition is moving scale and position together.
    ScaleAndMoveRunning,
}

/// Kind of an in-flight [`Transition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Scale towards the maximum about a fixed screen point.
    ScaleOnly,
    /// Scale towards the maximum while moving towards the viewport center.
    ScaleAndMove,
}

/// An in-flight, time-boxed change of a surface's scale and possibly position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Zoom-to-point: each tick re-anchors on `screen_point`.
    ScaleOnly {
        /// Screen point that stays fixed while zooming.
        screen_point: Point,
        /// Scale interpolation.
        scale: Tween<f64>,
    },
    /// Zoom-to-center: scale and anchored position interpolate side by side.
    ScaleAndMove {
        /// Scale interpolation; written without re-anchoring.
        scale: Tween<f64>,
        /// Anchored position interpolation, in parent space.
        position: Tween<Point>,
    },
}

impl Transition {
    /// Kind of this transition.
    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        match self {
            Self::ScaleOnly { .. } => TransitionKind::ScaleOnly,
            Self::ScaleAndMove { .. } => TransitionKind::ScaleAndMove,
        }
    }

    /// The scale interpolation.
    #[must_use]
    pub fn scale(&self) -> &Tween<f64> {
        match self {
            Self::ScaleOnly { scale, .. } | Self::ScaleAndMove { scale, .. } => scale,
        }
    }

    /// The position interpolation, for zoom-to-center transitions.
    #[must_use]
    pub fn position(&self) -> Option<&Tween<Point>> {
        match self {
            Self::ScaleOnly { .. } => None,
            Self::ScaleAndMove { position, .. } => Some(position),
        }
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.scale().duration()
    }

    /// Seconds advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.scale().elapsed()
    }
}

/// Drives zoom transitions for one surface.
#[derive(Clone, Debug, Default)]
pub struct ZoomAnimator {
    transition: Option<Transition>,
}

impl ZoomAnimator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AnimatorState {
        match self.transition.as_ref().map(Transition::kind) {
            None => AnimatorState::Idle,
            Some(TransitionKind::ScaleOnly) => AnimatorState::ScaleOnlyRunning,
            Some(TransitionKind::ScaleAndMove) => AnimatorState::ScaleAndMoveRunning,
        }
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.transition.is_some()
    }

    /// The running transition, if any.
    #[must_use]
    pub fn active_transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Stops the running transition immediately.
    ///
    /// The surface keeps the values of the last tick. Returns `true` if a
    /// transition was running.
    pub fn cancel(&mut self) -> bool {
        match self.transition.take() {
            Some(t) => {
                debug!(
                    kind = ?t.kind(),
                    elapsed = t.elapsed(),
                    duration = t.duration(),
                    "zoom transition cancelled"
                );
                true
            }
            None => false,
        }
    }

    /// Starts zooming towards the maximum scale about `screen_point`.
    ///
    /// The duration is [`ZoomConfig::zoom_to_point_duration`] of the current
    /// scale. When that is not positive (the surface is already at its
    /// maximum) nothing happens, a running transition is left alone, and
    /// `false` is returned.
    ///
    /// Otherwise any running transition is replaced and `true` is returned.
    /// Every subsequent [`advance`](Self::advance) performs a re-anchored
    /// [`scale_around`] with the interpolated scale, so the surface point under
    /// `screen_point` stays there.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if the surface is
    /// [degenerate](ZoomSurface::is_degenerate).
    pub fn zoom_to_point(
        &mut self,
        surface: &ZoomSurface,
        screen_point: Point,
        config: &ZoomConfig,
    ) -> Result<bool, ZoomError> {
        if surface.is_degenerate() {
            return Err(ZoomError::DegenerateSurface {
                size: surface.size(),
                scale: surface.scale(),
            });
        }
        let current = surface.scale();
        let duration = config.zoom_to_point_duration(current);
        if duration <= 0.0 {
            debug!(scale = current, "zoom-to-point skipped, nothing left to zoom");
            return Ok(false);
        }
        self.cancel();
        self.transition = Some(Transition::ScaleOnly {
            screen_point,
            scale: Tween::new(current, config.max_scale(), duration, config.scale_ease()),
        });
        debug!(
            from = current,
            to = config.max_scale(),
            duration,
            "zoom-to-point started"
        );
        Ok(true)
    }

    /// Starts zooming to the maximum scale while moving `world_position` to
    /// the viewport center.
    ///
    /// Any running transition is cancelled first. The pivot is placed on the
    /// surface point under `world_position` by probing a full
    /// [`scale_around`] to the maximum scale and then restoring the current
    /// scale, so the surface does not visibly jump. The transition then
    /// interpolates the scale to the maximum (with the scale ease) and the
    /// anchored position to the parent-space point under `viewport_center`
    /// (with the move ease), over
    /// [`ZoomConfig::zoom_to_center_duration`] seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if the surface is
    /// [degenerate](ZoomSurface::is_degenerate); the running transition is
    /// still cancelled.
    pub fn zoom_to_center<P: Projector + ?Sized>(
        &mut self,
        surface: &mut ZoomSurface,
        world_position: Point,
        config: &ZoomConfig,
        projector: &P,
        viewport_center: Point,
    ) -> Result<(), ZoomError> {
        self.cancel();
        let screen_point = projector.world_to_screen(world_position);
        let current = surface.scale();
        scale_around(surface, screen_point, config.max_scale(), config, projector)?;
        let center = projector.screen_to_parent_local(viewport_center);
        surface.set_scale(current);

        let duration = config.zoom_to_center_duration(current);
        self.transition = Some(Transition::ScaleAndMove {
            scale: Tween::new(current, config.max_scale(), duration, config.scale_ease()),
            position: Tween::new(
                surface.anchored_position(),
                center,
                duration,
                config.move_ease(),
            ),
        });
        debug!(
            from = current,
            to = config.max_scale(),
            duration,
            center_x = center.x,
            center_y = center.y,
            "zoom-to-center started"
        );
        Ok(())
    }

    /// Advances the running transition by `dt` seconds and writes the new
    /// values into `surface`.
    ///
    /// Returns the state after the tick. On the final tick the target values
    /// are written exactly and the animator becomes [`AnimatorState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::DegenerateSurface`] if a zoom-to-point tick finds
    /// the surface without area (its owner resized it to zero). The transition
    /// is dropped.
    pub fn advance<P: Projector + ?Sized>(
        &mut self,
        surface: &mut ZoomSurface,
        config: &ZoomConfig,
        projector: &P,
        dt: f64,
    ) -> Result<AnimatorState, ZoomError> {
        let outcome = match &mut self.transition {
            None => return Ok(AnimatorState::Idle),
            Some(Transition::ScaleOnly {
                screen_point,
                scale,
            }) => {
                let step = scale.advance(dt);
                trace!(scale = step.value, "zoom-to-point tick");
                scale_around(surface, *screen_point, step.value, config, projector)
                    .map(|()| step.finished)
            }
            Some(Transition::ScaleAndMove { scale, position }) => {
                let scale_step = scale.advance(dt);
                let position_step = position.advance(dt);
                trace!(
                    scale = scale_step.value,
                    x = position_step.value.x,
                    y = position_step.value.y,
                    "zoom-to-center tick"
                );
                surface.set_scale(config.clamp_scale(scale_step.value));
                surface.set_anchored_position(position_step.value);
                Ok(scale_step.finished && position_step.finished)
            }
        };
        let finished = match outcome {
            Ok(finished) => finished,
            Err(err) => {
                warn!(%err, "zoom transition dropped");
                self.transition = None;
                return Err(err);
            }
        };
        if finished {
            if let Some(t) = self.transition.take() {
                debug!(kind = ?t.kind(), scale = surface.scale(), "zoom transition finished");
            }
        }
        Ok(self.state())
    }
}
