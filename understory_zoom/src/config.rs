// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_tween::Ease;

use crate::error::{ConfigError, ZoomError};

/// Shortest zoom-to-center transition, in seconds.
///
/// Keeps the move towards the viewport center visible even when the surface
/// is already at (or very near) its maximum scale.
pub const MIN_CENTER_ZOOM_TIME: f64 = 0.3;

/// Owner-supplied zoom parameters.
///
/// A `ZoomConfig` is always valid: `0 < min_scale <= max_scale` and
/// `max_zoom_time >= 0`. Values can only be changed through the `with_*`
/// builders, which validate again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    min_scale: f64,
    max_scale: f64,
    max_zoom_time: f64,
    scale_ease: Ease,
    move_ease: Ease,
}

impl Default for ZoomConfig {
    /// Scale range `[1, 5]`, a one second full-range zoom, linear eases.
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 5.0,
            max_zoom_time: 1.0,
            scale_ease: Ease::Linear,
            move_ease: Ease::Linear,
        }
    }
}

impl ZoomConfig {
    /// Creates a configuration for the scale range `[min_scale, max_scale]`.
    ///
    /// Zoom time and eases take their [`Default`] values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ScaleRange`] unless `0 < min_scale <= max_scale`
    /// with both values finite.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, ZoomError> {
        let valid = min_scale.is_finite()
            && max_scale.is_finite()
            && min_scale > 0.0
            && min_scale <= max_scale;
        if !valid {
            return Err(ConfigError::ScaleRange {
                min: min_scale,
                max: max_scale,
            }
            .into());
        }
        Ok(Self {
            min_scale,
            max_scale,
            ..Self::default()
        })
    }

    /// Returns a copy with the time a full `min → max` zoom takes, in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZoomTime`] if `seconds` is negative or not finite.
    pub fn with_max_zoom_time(self, seconds: f64) -> Result<Self, ZoomError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ConfigError::ZoomTime(seconds).into());
        }
        Ok(Self {
            max_zoom_time: seconds,
            ..self
        })
    }

    /// Returns a copy using `ease` for animated scale changes.
    #[must_use]
    pub fn with_scale_ease(self, ease: Ease) -> Self {
        Self {
            scale_ease: ease,
            ..self
        }
    }

    /// Returns a copy using `ease` for animated position changes.
    #[must_use]
    pub fn with_move_ease(self, ease: Ease) -> Self {
        Self {
            move_ease: ease,
            ..self
        }
    }

    /// Smallest allowed scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Seconds a zoom across the whole scale range takes.
    #[must_use]
    pub fn max_zoom_time(&self) -> f64 {
        self.max_zoom_time
    }

    /// Ease for animated scale changes.
    #[must_use]
    pub fn scale_ease(&self) -> Ease {
        self.scale_ease
    }

    /// Ease for animated position changes.
    #[must_use]
    pub fn move_ease(&self) -> Ease {
        self.move_ease
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    ///
    /// NaN passes through unchanged; callers decide what a NaN target means.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Fraction of the scale range still left between `scale` and the maximum.
    ///
    /// `1.0` at `min_scale`, `0.0` at `max_scale`, negative above it. A
    /// single-point range (`min == max`) has nothing left to zoom and yields `0.0`.
    #[must_use]
    pub fn remaining_fraction(&self, scale: f64) -> f64 {
        let range = self.max_scale - self.min_scale;
        if range <= 0.0 {
            return 0.0;
        }
        (self.max_scale - scale) / range
    }

    /// Duration of a zoom-to-point transition starting at `scale`.
    ///
    /// Proportional to the remaining fraction of the scale range, so zooming
    /// from near the maximum is quicker. Zero or negative means there is
    /// nothing to animate.
    #[must_use]
    pub fn zoom_to_point_duration(&self, scale: f64) -> f64 {
        self.remaining_fraction(scale) * self.max_zoom_time
    }

    /// Duration of a zoom-to-center transition starting at `scale`.
    ///
    /// Same as [`zoom_to_point_duration`](Self::zoom_to_point_duration) but
    /// never shorter than [`MIN_CENTER_ZOOM_TIME`].
    #[must_use]
    pub fn zoom_to_center_duration(&self, scale: f64) -> f64 {
        self.zoom_to_point_duration(scale).max(MIN_CENTER_ZOOM_TIME)
    }
}

#[cfg(test)]
mod tests {
    use understory_tween::Ease;

    use super::{MIN_CENTER_ZOOM_TIME, ZoomConfig};
    use crate::error::{ConfigError, ZoomError};

    fn config() -> ZoomConfig {
        ZoomConfig::new(1.0, 5.0)
            .and_then(|c| c.with_max_zoom_time(1.0))
            .unwrap()
    }

    #[test]
    fn rejects_meaningless_scale_ranges() {
        for (min, max) in [
            (2.0, 1.0),
            (0.0, 1.0),
            (-1.0, 1.0),
            (1.0, f64::INFINITY),
            (f64::NAN, 1.0),
        ] {
            let err = ZoomConfig::new(min, max).unwrap_err();
            assert!(
                matches!(
                    err,
                    ZoomError::InvalidConfig(ConfigError::ScaleRange { .. })
                ),
                "({min}, {max}) should be rejected"
            );
        }
        assert!(ZoomConfig::new(2.0, 2.0).is_ok());
    }

    #[test]
    fn rejects_negative_zoom_time() {
        let err = config().with_max_zoom_time(-0.5).unwrap_err();
        assert_eq!(err, ZoomError::InvalidConfig(ConfigError::ZoomTime(-0.5)));
        assert!(config().with_max_zoom_time(f64::NAN).is_err());
        assert!(config().with_max_zoom_time(0.0).is_ok());
    }

    #[test]
    fn builders_keep_other_fields() {
        let c = config()
            .with_scale_ease(Ease::OutCubic)
            .with_move_ease(Ease::InOutQuad);
        assert_eq!(c.min_scale(), 1.0);
        assert_eq!(c.max_scale(), 5.0);
        assert_eq!(c.max_zoom_time(), 1.0);
        assert_eq!(c.scale_ease(), Ease::OutCubic);
        assert_eq!(c.move_ease(), Ease::InOutQuad);
    }

    #[test]
    fn clamp_scale_bounds_targets() {
        let c = config();
        assert_eq!(c.clamp_scale(0.2), 1.0);
        assert_eq!(c.clamp_scale(3.5), 3.5);
        assert_eq!(c.clamp_scale(12.0), 5.0);
    }

    #[test]
    fn zoom_to_point_duration_shrinks_towards_max() {
        let c = config();
        assert_eq!(c.zoom_to_point_duration(3.0), 0.5);
        assert_eq!(c.zoom_to_point_duration(1.0), 1.0);
        assert_eq!(c.zoom_to_point_duration(5.0), 0.0);
        assert!(c.zoom_to_point_duration(6.0) < 0.0);

        let mut previous = f64::INFINITY;
        for step in 0..=40 {
            let scale = 1.0 + f64::from(step) * 0.1;
            let d = c.zoom_to_point_duration(scale);
            assert!(d < previous, "duration must strictly decrease at {scale}");
            previous = d;
        }
    }

    #[test]
    fn zoom_to_center_duration_has_a_floor() {
        let c = config();
        assert_eq!(c.zoom_to_center_duration(1.0), 1.0);
        assert_eq!(c.zoom_to_center_duration(4.9), MIN_CENTER_ZOOM_TIME);
        assert_eq!(c.zoom_to_center_duration(5.0), MIN_CENTER_ZOOM_TIME);
        assert_eq!(c.zoom_to_center_duration(9.0), MIN_CENTER_ZOOM_TIME);

        let instant = c.with_max_zoom_time(0.0).unwrap();
        assert_eq!(instant.zoom_to_point_duration(1.0), 0.0);
        assert_eq!(instant.zoom_to_center_duration(1.0), MIN_CENTER_ZOOM_TIME);
    }

    #[test]
    fn single_point_range_has_nothing_to_zoom() {
        let c = ZoomConfig::new(2.0, 2.0).unwrap();
        assert_eq!(c.remaining_fraction(2.0), 0.0);
        assert_eq!(c.zoom_to_point_duration(2.0), 0.0);
        assert_eq!(c.zoom_to_center_duration(2.0), MIN_CENTER_ZOOM_TIME);
    }
}
