use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::parameter_window::ParameterWindow;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::newton::kernel::{NewtonResult, newton};
use crate::core::fractals::newton::params::NewtonParams;
use crate::core::util::pixel_to_plane_coords::{PixelToPlaneError, pixel_to_plane_coords};

#[derive(Debug, PartialEq)]
pub struct NewtonAlgorithm {
    window: ParameterWindow,
    params: NewtonParams,
}

impl FractalAlgorithm for NewtonAlgorithm {
    type Success = NewtonResult;
    type Failure = PixelToPlaneError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z0 = pixel_to_plane_coords(pixel, &self.window)?;

        Ok(newton(
            z0,
            self.params.function(),
            self.params.max_iterations(),
            self.params.epsilon(),
        ))
    }

    fn viewport(&self) -> Viewport {
        self.window.viewport()
    }
}

impl NewtonAlgorithm {
    #[must_use]
    pub fn new(window: ParameterWindow, params: NewtonParams) -> Self {
        Self { window, params }
    }
}
