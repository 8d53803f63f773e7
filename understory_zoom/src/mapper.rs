// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate conversion between screen space and a surface's own space.
//!
//! Four spaces are involved:
//! - **Screen**: device pixels as delivered by pointer/touch events.
//! - **World**: the host's scene space (for example a canvas or camera space).
//! - **Parent**: the local space of the surface's parent, in which
//!   [`ZoomSurface::anchored_position`] is expressed.
//! - **Local**: the surface's own unscaled space. *Pivot-relative* local points
//!   have the pivot at the origin; *rect* points have the rect's minimum corner
//!   at the origin and do not depend on the pivot.
//!
//! The host owns the screen/world/parent relationship (camera, DPI, canvas
//! scaling) and exposes it through [`Projector`]. The parent/local relationship
//! is fully determined by the surface and is computed here.

use kurbo::{Affine, Point};

use crate::surface::ZoomSurface;

/// Host-supplied projection between screen space and the surface's spaces.
///
/// Implementations are expected to be mutually inverse for points inside the
/// viewport; beyond that their exact semantics (camera projection, DPI
/// scaling) are the host's business.
pub trait Projector {
    /// Converts a screen point into `surface`'s pivot-relative local space.
    fn screen_to_local(&self, surface: &ZoomSurface, screen: Point) -> Point;

    /// Converts a world point into screen space.
    fn world_to_screen(&self, world: Point) -> Point;

    /// Converts a screen point into the local space of the surface's parent.
    fn screen_to_parent_local(&self, screen: Point) -> Point;

    /// Converts a screen point into the world point on `surface`'s plane.
    fn screen_to_world(&self, surface: &ZoomSurface, screen: Point) -> Point;
}

/// Converts a screen point into a rect point of `surface`.
///
/// Rect points are measured from the rect's minimum corner in unscaled units,
/// so the same on-screen spot keeps the same rect point when the pivot moves.
#[must_use]
pub fn screen_to_rect_point<P: Projector + ?Sized>(
    surface: &ZoomSurface,
    screen: Point,
    projector: &P,
) -> Point {
    projector.screen_to_local(surface, screen) + surface.pivot_offset()
}

/// Maps a rect point of `surface` into its parent's space.
#[must_use]
pub fn rect_point_to_parent(surface: &ZoomSurface, rect_point: Point) -> Point {
    let from_pivot = (rect_point - surface.pivot_offset()).to_vec2();
    surface.anchored_position() + from_pivot * surface.scale()
}

/// Maps a parent-space point into `surface`'s pivot-relative local space.
///
/// The surface's scale must be non-zero.
#[must_use]
pub fn parent_to_local(surface: &ZoomSurface, parent: Point) -> Point {
    ((parent - surface.anchored_position()) / surface.scale()).to_point()
}

/// Maps a parent-space point into a rect point of `surface`.
///
/// The surface's scale must be non-zero.
#[must_use]
pub fn parent_to_rect_point(surface: &ZoomSurface, parent: Point) -> Point {
    parent_to_local(surface, parent) + surface.pivot_offset()
}

/// A [`Projector`] for flat 2D hosts where screen, parent and world spaces are
/// related by affine transforms.
///
/// This covers screen-space overlays with a canvas scale factor and any host
/// that already tracks a parent-to-screen matrix. World space defaults to the
/// parent space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineProjector {
    parent_to_screen: Affine,
    screen_to_parent: Affine,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Default for AffineProjector {
    fn default() -> Self {
        Self::new(Affine::IDENTITY)
    }
}

impl AffineProjector {
    /// Creates a projector whose parent space maps to screen via
    /// `parent_to_screen`, with world space equal to parent space.
    ///
    /// `parent_to_screen` must be invertible.
    #[must_use]
    pub fn new(parent_to_screen: Affine) -> Self {
        let screen_to_parent = parent_to_screen.inverse();
        Self {
            parent_to_screen,
            screen_to_parent,
            world_to_screen: parent_to_screen,
            screen_to_world: screen_to_parent,
        }
    }

    /// Returns the projector with a separate world-to-screen transform.
    ///
    /// `world_to_screen` must be invertible.
    #[must_use]
    pub fn with_world_to_screen(mut self, world_to_screen: Affine) -> Self {
        self.world_to_screen = world_to_screen;
        self.screen_to_world = world_to_screen.inverse();
        self
    }

    /// Parent-to-screen transform.
    #[must_use]
    pub fn parent_to_screen(&self) -> Affine {
        self.parent_to_screen
    }

    /// Maps a rect point of `surface` to the screen.
    #[must_use]
    pub fn rect_point_to_screen(&self, surface: &ZoomSurface, rect_point: Point) -> Point {
        self.parent_to_screen * rect_point_to_parent(surface, rect_point)
    }
}

impl Projector for AffineProjector {
    fn screen_to_local(&self, surface: &ZoomSurface, screen: Point) -> Point {
        parent_to_local(surface, self.screen_to_parent * screen)
    }

    fn world_to_screen(&self, world: Point) -> Point {
        self.world_to_screen * world
    }

    fn screen_to_parent_local(&self, screen: Point) -> Point {
        self.screen_to_parent * screen
    }

    fn screen_to_world(&self, _surface: &ZoomSurface, screen: Point) -> Point {
        // Every screen ray hits a flat surface's plane.
        self.screen_to_world * screen
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Size, Vec2};

    use super::{
        AffineProjector, Projector, parent_to_rect_point, rect_point_to_parent,
        screen_to_rect_point,
    };
    use crate::surface::ZoomSurface;

    fn assert_near(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
    }

    fn surface() -> ZoomSurface {
        ZoomSurface::new(Size::new(400.0, 300.0))
            .with_pivot(Vec2::new(0.25, 0.75))
            .with_scale(2.0)
            .with_anchored_position(Point::new(30.0, -20.0))
    }

    #[test]
    fn rect_points_round_trip_through_parent_space() {
        let s = surface();
        for p in [
            Point::ZERO,
            Point::new(400.0, 300.0),
            Point::new(123.0, 45.5),
            Point::new(-50.0, 700.0),
        ] {
            assert_near(parent_to_rect_point(&s, rect_point_to_parent(&s, p)), p);
        }
    }

    #[test]
    fn pivot_sits_at_anchored_position() {
        let s = surface();
        let pivot_rect_point = s.pivot_offset().to_point();
        assert_near(rect_point_to_parent(&s, pivot_rect_point), s.anchored_position());
    }

    #[test]
    fn screen_round_trip_through_canvas_scale() {
        let projector =
            AffineProjector::new(Affine::translate((100.0, 50.0)) * Affine::scale(1.5));
        let s = surface();
        let rect_point = Point::new(80.0, 210.0);
        let screen = projector.rect_point_to_screen(&s, rect_point);
        assert_near(screen_to_rect_point(&s, screen, &projector), rect_point);
    }

    #[test]
    fn rect_point_is_independent_of_pivot() {
        let projector = AffineProjector::default();
        let a = ZoomSurface::new(Size::new(100.0, 100.0));
        // Same placement on screen, different pivot bookkeeping.
        let b = a
            .with_pivot(Vec2::new(0.0, 0.0))
            .with_anchored_position(Point::new(-50.0, -50.0));
        let screen = Point::new(10.0, -20.0);
        assert_near(
            screen_to_rect_point(&a, screen, &projector),
            screen_to_rect_point(&b, screen, &projector),
        );
    }

    #[test]
    fn world_defaults_to_parent_space() {
        let s = surface();
        let projector = AffineProjector::new(Affine::scale(2.0));
        let world = Point::new(3.0, 4.0);
        let screen = projector.world_to_screen(world);
        assert_eq!(screen, Point::new(6.0, 8.0));
        assert_near(projector.screen_to_world(&s, screen), world);
        assert_near(projector.screen_to_parent_local(screen), world);

        let shifted = projector.with_world_to_screen(Affine::translate((10.0, 0.0)));
        assert_eq!(shifted.world_to_screen(world), Point::new(13.0, 4.0));
        assert_near(shifted.screen_to_world(&s, Point::new(13.0, 4.0)), world);
    }
}
