// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pivot re-anchoring.
//!
//! Scaling always happens about the pivot. To zoom about an arbitrary point of
//! the surface, the pivot is first moved onto that point and the anchored
//! position is shifted by the same amount in parent space, so nothing moves on
//! screen. A subsequent scale change then leaves the point fixed.
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_zoom::ZoomSurface;
//! use understory_zoom::rebase::rebase;
//!
//! let mut surface = ZoomSurface::new(Size::new(100.0, 100.0)).with_scale(2.0);
//!
//! // Re-anchor on the rect's minimum corner.
//! let r = rebase(&surface, Point::ZERO).unwrap();
//! assert_eq!(r.pivot, Vec2::ZERO);
//! assert_eq!(r.position_delta, Vec2::new(-100.0, -100.0));
//!
//! r.apply(&mut surface);
//! assert_eq!(surface.anchored_position(), Point::new(-100.0, -100.0));
//! ```

use kurbo::{Point, Vec2};

use crate::error::ZoomError;
use crate::surface::ZoomSurface;

/// Pivot and position correction that re-anchor a surface on a rect point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rebase {
    /// The new normalized pivot.
    pub pivot: Vec2,
    /// Shift to add to the anchored position, in parent units.
    pub position_delta: Vec2,
}

impl Rebase {
    /// Writes the new pivot and shifted position into `surface`.
    ///
    /// The scale is left untouched.
    pub fn apply(self, surface: &mut ZoomSurface) {
        surface.set_pivot(self.pivot);
        surface.set_anchored_position(surface.anchored_position() + self.position_delta);
    }
}

/// Computes how to move `surface`'s pivot onto `anchor` without moving the
/// surface on screen.
///
/// `anchor` is a rect point (origin at the rect's minimum corner, unscaled
/// units). It may lie outside the rect; the pivot then extrapolates beyond
/// `[0, 1]`.
///
/// # Errors
///
/// Returns [`ZoomError::DegenerateSurface`] if the surface has zero width or
/// height, or a zero scale.
pub fn rebase(surface: &ZoomSurface, anchor: Point) -> Result<Rebase, ZoomError> {
    if surface.is_degenerate() {
        return Err(ZoomError::DegenerateSurface {
            size: surface.size(),
            scale: surface.scale(),
        });
    }
    let size = surface.size();
    let pivot = Vec2::new(anchor.x / size.width, anchor.y / size.height);
    let pivot_delta = pivot - surface.pivot();
    // Pivot and size are unscaled; the anchored position lives in parent units.
    let position_delta = Vec2::new(
        pivot_delta.x * size.width,
        pivot_delta.y * size.height,
    ) * surface.scale();
    Ok(Rebase {
        pivot,
        position_delta,
    })
}
