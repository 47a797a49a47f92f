use crate::core::data::complex::Complex;
use crate::core::data::parameter_window::ParameterWindow;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneError {
    PointOutsideViewport { point: Point, viewport: Viewport },
}

impl fmt::Display for PixelToPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideViewport { point, viewport } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} viewport",
                    point.x,
                    point.y,
                    viewport.width(),
                    viewport.height()
                )
            }
        }
    }
}

impl Error for PixelToPlaneError {}

/// Maps a pixel to `(x_min + col * x_scale, y_min + row * y_scale)`.
pub fn pixel_to_plane_coords(
    pixel: Point,
    window: &ParameterWindow,
) -> Result<Complex, PixelToPlaneError> {
    let viewport = window.viewport();

    if !viewport.contains_point(pixel) {
        return Err(PixelToPlaneError::PointOutsideViewport {
            point: pixel,
            viewport,
        });
    }

    Ok(window.plane_point(pixel))
}
