use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::parameter_window::ParameterWindow;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::lyapunov::kernel::{LyapunovResult, lyapunov_exponent};
use crate::core::fractals::lyapunov::params::LyapunovParams;
use crate::core::util::pixel_to_plane_coords::{PixelToPlaneError, pixel_to_plane_coords};

/// Samples the `(a, b)` growth-rate plane: `a` runs along x, `b` along y.
#[derive(Debug, PartialEq)]
pub struct LyapunovAlgorithm {
    window: ParameterWindow,
    params: LyapunovParams,
}

impl FractalAlgorithm for LyapunovAlgorithm {
    type Success = LyapunovResult;
    type Failure = PixelToPlaneError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let rates = pixel_to_plane_coords(pixel, &self.window)?;

        Ok(lyapunov_exponent(
            self.params.sequence().symbols(),
            rates.real,
            rates.imag,
            self.params.iterations(),
        ))
    }

    fn viewport(&self) -> Viewport {
        self.window.viewport()
    }
}

impl LyapunovAlgorithm {
    #[must_use]
    pub fn new(window: ParameterWindow, params: LyapunovParams) -> Self {
        Self { window, params }
    }
}
