// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// The rectangle being zoomed and panned.
///
/// A surface is placed inside a parent coordinate space by three values:
/// - `pivot`: a normalized point of the rect (`(0, 0)` is the minimum corner,
///   `(1, 1)` the maximum corner) about which scaling happens.
/// - `anchored_position`: where the pivot sits in the parent's space.
/// - `scale`: a uniform scale applied about the pivot.
///
/// `size` belongs to the owner (layout); zoom operations read it but only ever
/// write pivot, anchored position and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomSurface {
    size: Size,
    pivot: Vec2,
    scale: f64,
    anchored_position: Point,
}

impl ZoomSurface {
    /// Creates an unscaled surface of `size`, pivoted at its center, with the
    /// pivot at the parent origin.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pivot: Vec2::new(0.5, 0.5),
            scale: 1.0,
            anchored_position: Point::ZERO,
        }
    }

    /// Returns the surface with its pivot set to `pivot`.
    #[must_use]
    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    /// Returns the surface with its scale set to `scale`.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns the surface with its pivot placed at `position` in parent space.
    #[must_use]
    pub fn with_anchored_position(mut self, position: Point) -> Self {
        self.anchored_position = position;
        self
    }

    /// Unscaled size of the rect.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the unscaled size, as the owner's layout would.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Normalized pivot.
    #[must_use]
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Sets the normalized pivot without compensating the position.
    ///
    /// This visibly moves the rect unless the anchored position is adjusted
    /// too; see [`crate::rebase`] for the compensated version.
    pub fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    /// Uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the uniform scale about the current pivot.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Position of the pivot in parent space.
    #[must_use]
    pub fn anchored_position(&self) -> Point {
        self.anchored_position
    }

    /// Moves the pivot to `position` in parent space.
    pub fn set_anchored_position(&mut self, position: Point) {
        self.anchored_position = position;
    }

    /// Returns `true` if the rect has no usable area to place a pivot in.
    ///
    /// A zero or non-finite scale collapses the rect in parent space, so it
    /// counts as degenerate too.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let Size { width, height } = self.size;
        let finite = width.is_finite() && height.is_finite() && self.scale.is_finite();
        !finite || width == 0.0 || height == 0.0 || self.scale == 0.0
    }

    /// Offset of the pivot from the rect's minimum corner, in unscaled units.
    #[must_use]
    pub fn pivot_offset(&self) -> Vec2 {
        Vec2::new(
            self.pivot.x * self.size.width,
            self.pivot.y * self.size.height,
        )
    }
}
