//! The rectangle of the parameter plane currently mapped onto the viewport.
//!
//! Scales are always derived from the bounds and the viewport inside the
//! constructor, so the displayed geometry and the displayed bounds cannot
//! drift apart. Every change, including a zoom, produces a new value.

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::data::zoom_event::ZoomEvent;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParameterWindowError {
    DegenerateRange { axis: Axis, min: f64, max: f64 },
    NonFiniteBound { axis: Axis, min: f64, max: f64 },
    BelowPixelResolution { axis: Axis, min: f64, max: f64, pixels: u32 },
}

impl fmt::Display for ParameterWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRange { axis, min, max } => {
                write!(f, "{} range must be positive: [{}, {}]", axis, min, max)
            }
            Self::NonFiniteBound { axis, min, max } => {
                write!(f, "{} bounds must be finite: [{}, {}]", axis, min, max)
            }
            Self::BelowPixelResolution {
                axis,
                min,
                max,
                pixels,
            } => write!(
                f,
                "{} range [{}, {}] is too narrow to split across {} pixels",
                axis, min, max, pixels
            ),
        }
    }
}

impl Error for ParameterWindowError {}

/// Raw plane bounds. For the Lyapunov fractal `x` is the `a` growth rate and
/// `y` is `b`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl WindowBounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    fn validate_axis(axis: Axis, min: f64, max: f64) -> Result<(), ParameterWindowError> {
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(ParameterWindowError::NonFiniteBound { axis, min, max });
        }

        if max - min <= 0.0 || min + (max - min) == min {
            return Err(ParameterWindowError::DegenerateRange { axis, min, max });
        }

        Ok(())
    }

    /// Adjacent pixels must sample different coordinates.
    fn validate_step(
        axis: Axis,
        min: f64,
        max: f64,
        scale: f64,
        pixels: u32,
    ) -> Result<(), ParameterWindowError> {
        if min + scale == min {
            return Err(ParameterWindowError::BelowPixelResolution {
                axis,
                min,
                max,
                pixels,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParameterWindow {
    bounds: WindowBounds,
    viewport: Viewport,
    x_scale: f64,
    y_scale: f64,
}

impl ParameterWindow {
    pub fn new(bounds: WindowBounds, viewport: Viewport) -> Result<Self, ParameterWindowError> {
        WindowBounds::validate_axis(Axis::X, bounds.x_min, bounds.x_max)?;
        WindowBounds::validate_axis(Axis::Y, bounds.y_min, bounds.y_max)?;

        let x_scale = bounds.width() / f64::from(viewport.width());
        let y_scale = bounds.height() / f64::from(viewport.height());

        WindowBounds::validate_step(
            Axis::X,
            bounds.x_min,
            bounds.x_max,
            x_scale,
            viewport.width(),
        )?;
        WindowBounds::validate_step(
            Axis::Y,
            bounds.y_min,
            bounds.y_max,
            y_scale,
            viewport.height(),
        )?;

        Ok(Self {
            bounds,
            viewport,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Plane coordinate sampled by `pixel`; the real part is the x axis.
    /// Does not check that `pixel` lies inside the viewport.
    #[must_use]
    pub fn plane_point(&self, pixel: Point) -> Complex {
        Complex {
            real: self.bounds.x_min + f64::from(pixel.x) * self.x_scale,
            imag: self.bounds.y_min + f64::from(pixel.y) * self.y_scale,
        }
    }

    /// Zooms toward (or away from) the anchor pixel so the plane point under
    /// it stays put. Positive ratios shrink the window, negative ones grow it.
    ///
    /// A result that is non-finite, empty or inverted, or too narrow for one
    /// pixel step to move the coordinate, is rejected and the caller keeps its
    /// current window.
    pub fn reframe(&self, zoom: ZoomEvent) -> Result<Self, ParameterWindowError> {
        let x_ratio =
            (f64::from(zoom.anchor.x) / f64::from(self.viewport.width())).clamp(0.0, 1.0);
        let y_ratio =
            (f64::from(zoom.anchor.y) / f64::from(self.viewport.height())).clamp(0.0, 1.0);

        let delta_x = zoom.ratio * self.bounds.width();
        let delta_y = zoom.ratio * self.bounds.height();

        let bounds = WindowBounds {
            x_min: self.bounds.x_min + delta_x * x_ratio,
            x_max: self.bounds.x_max - delta_x * (1.0 - x_ratio),
            y_min: self.bounds.y_min + delta_y * y_ratio,
            y_max: self.bounds.y_max - delta_y * (1.0 - y_ratio),
        };

        Self::new(bounds, self.viewport)
    }
}
