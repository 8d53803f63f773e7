// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Errors reported by zoom operations.
///
/// Both variants are precondition violations: they are reported so callers can
/// fail fast, not so they can retry. Out-of-range scale targets are never an
/// error; they are clamped into the configured range instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomError {
    /// The surface has zero (or non-finite) width or height, or a zero (or
    /// non-finite) scale, so screen points cannot be mapped onto it.
    DegenerateSurface {
        /// The surface size.
        size: Size,
        /// The surface scale.
        scale: f64,
    },
    /// A configuration value has no geometric meaning.
    InvalidConfig(ConfigError),
}

/// Which configuration value was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The scale range is empty, non-positive or non-finite.
    ///
    /// A valid range satisfies `0 < min <= max`.
    ScaleRange {
        /// Requested minimum scale.
        min: f64,
        /// Requested maximum scale.
        max: f64,
    },
    /// The maximum zoom time is negative or non-finite.
    ZoomTime(f64),
    /// The density normalization factor is not a positive finite number.
    PixelsPerUnit(f64),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSurface { size, scale } => write!(
                f,
                "surface of size {}x{} at scale {scale} has no area to anchor a pivot in",
                size.width, size.height
            ),
            Self::InvalidConfig(err) => write!(f, "invalid zoom configuration: {err}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleRange { min, max } => {
                write!(f, "scale range [{min}, {max}] must satisfy 0 < min <= max")
            }
            Self::ZoomTime(t) => write!(f, "max zoom time {t} must be finite and >= 0"),
            Self::PixelsPerUnit(v) => write!(f, "pixels per unit {v} must be finite and > 0"),
        }
    }
}

impl core::error::Error for ZoomError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::DegenerateSurface { .. } => None,
            Self::InvalidConfig(err) => Some(err),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for ZoomError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}
