// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::config::ZoomConfig;
use crate::error::ZoomError;
use crate::mapper::{Projector, screen_to_rect_point};
use crate::rebase::rebase;
use crate::surface::ZoomSurface;

/// Sets `surface`'s scale to `target_scale` about the surface point currently
/// under `screen_point`.
///
/// This is the atomic re-anchored scale step shared by gestures and animated
/// zoom-to-point:
/// 1. `screen_point` is mapped to a rect point through `projector`.
/// 2. The pivot is moved onto that point with a compensating position shift.
/// 3. The scale is set to `target_scale` clamped into the configured range.
///
/// The surface point under `screen_point` stays under it. Calling this twice
/// with the same inputs gives the same result as calling it once. A NaN target
/// only performs the re-anchoring.
///
/// # Errors
///
/// Returns [`ZoomError::DegenerateSurface`] if the surface is
/// [degenerate](ZoomSurface::is_degenerate); the surface is left unchanged.
pub fn scale_around<P: Projector + ?Sized>(
    surface: &mut ZoomSurface,
    screen_point: Point,
    target_scale: f64,
    config: &ZoomConfig,
    projector: &P,
) -> Result<(), ZoomError> {
    let anchor = screen_to_rect_point(surface, screen_point, projector);
    rebase(surface, anchor)?.apply(surface);
    if !target_scale.is_nan() {
        surface.set_scale(config.clamp_scale(target_scale));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Size, Vec2};

    use super::scale_around;
    use crate::config::ZoomConfig;
    use crate::error::ZoomError;
    use crate::mapper::{AffineProjector, screen_to_rect_point};
    use crate::surface::ZoomSurface;

    fn assert_near(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
    }

    fn setup() -> (ZoomSurface, AffineProjector, ZoomConfig) {
        let surface = ZoomSurface::new(Size::new(400.0, 300.0))
            .with_scale(1.5)
            .with_anchored_position(Point::new(20.0, 10.0));
        let projector =
            AffineProjector::new(Affine::translate((320.0, 240.0)) * Affine::scale(1.25));
        (surface, projector, ZoomConfig::new(1.0, 5.0).unwrap())
    }

    #[test]
    fn screen_point_stays_fixed_across_zoom() {
        let (mut s, projector, config) = setup();
        let screen = Point::new(250.0, 180.0);
        let anchor = screen_to_rect_point(&s, screen, &projector);

        scale_around(&mut s, screen, 4.0, &config, &projector).unwrap();

        assert_eq!(s.scale(), 4.0);
        assert_near(projector.rect_point_to_screen(&s, anchor), screen);
    }

    #[test]
    fn unchanged_scale_moves_bookkeeping_but_not_pixels() {
        let (mut s, projector, config) = setup();
        let probes = [Point::ZERO, Point::new(400.0, 300.0), Point::new(120.0, 7.0)];
        let before = probes.map(|p| projector.rect_point_to_screen(&s, p));
        let pivot_before = s.pivot();

        scale_around(&mut s, Point::new(400.0, 100.0), 1.5, &config, &projector).unwrap();

        assert_eq!(s.scale(), 1.5);
        assert_ne!(s.pivot(), pivot_before);
        let after = probes.map(|p| projector.rect_point_to_screen(&s, p));
        for (a, b) in before.into_iter().zip(after) {
            assert_near(a, b);
        }
    }

    #[test]
    fn target_scale_is_clamped() {
        let (mut s, projector, config) = setup();
        for (target, expected) in [(0.1, 1.0), (2.5, 2.5), (50.0, 5.0), (-3.0, 1.0)] {
            scale_around(&mut s, Point::ZERO, target, &config, &projector).unwrap();
            assert_eq!(s.scale(), expected);
        }
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let (mut s, projector, config) = setup();
        let screen = Point::new(100.0, 300.0);
        scale_around(&mut s, screen, 3.0, &config, &projector).unwrap();
        let once = s;
        scale_around(&mut s, screen, 3.0, &config, &projector).unwrap();
        assert_eq!(s.scale(), once.scale());
        assert!((s.pivot() - once.pivot()).hypot() < 1e-12);
        assert_near(s.anchored_position(), once.anchored_position());
    }

    #[test]
    fn nan_target_only_reanchors() {
        let (mut s, projector, config) = setup();
        scale_around(&mut s, Point::new(10.0, 10.0), f64::NAN, &config, &projector).unwrap();
        assert_eq!(s.scale(), 1.5);
    }

    #[test]
    fn degenerate_surface_is_left_alone() {
        let (_, projector, config) = setup();
        let mut s = ZoomSurface::new(Size::new(100.0, 0.0)).with_pivot(Vec2::new(0.2, 0.2));
        let before = s;
        let err = scale_around(&mut s, Point::ZERO, 2.0, &config, &projector).unwrap_err();
        assert!(matches!(err, ZoomError::DegenerateSurface { .. }));
        assert_eq!(s, before);
    }

    #[test]
    fn zero_scale_fails_without_touching_surface() {
        let (_, projector, config) = setup();
        let mut s = ZoomSurface::new(Size::new(100.0, 100.0)).with_scale(0.0);
        let before = s;
        let err = scale_around(&mut s, Point::new(10.0, 10.0), 2.0, &config, &projector)
            .unwrap_err();
        assert!(matches!(
            err,
            ZoomError::DegenerateSurface { scale, .. } if scale == 0.0
        ));
        assert_eq!(s, before);
    }
}
