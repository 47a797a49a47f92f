use crate::core::actions::generate_fractal::sampler_strategy::SamplerStrategy;
use crate::core::data::parameter_window::{ParameterWindow, WindowBounds};
use crate::core::data::render_request::{BuildRequestError, RenderRequest};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_settings::FractalSettings;
use crate::core::fractals::newton::params::{DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS, NewtonParams};
use crate::core::fractals::newton::root_function::RootFunction;
use serde::{Deserialize, Serialize};

pub(crate) fn default_bounds() -> WindowBounds {
    WindowBounds {
        x_min: -2.21,
        x_max: 1.63,
        y_min: -1.2,
        y_max: 1.2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewtonConfig {
    pub width: u32,
    pub height: u32,
    pub bounds: WindowBounds,
    pub function: RootFunction,
    pub max_iterations: u32,
    pub epsilon: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            bounds: default_bounds(),
            function: RootFunction::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl NewtonConfig {
    pub fn build_render_request(
        &self,
        strategy: SamplerStrategy,
    ) -> Result<RenderRequest, BuildRequestError> {
        let viewport = Viewport::new(self.width, self.height)?;
        let window = ParameterWindow::new(self.bounds, viewport)?;
        let params = NewtonParams::new(self.function, self.max_iterations, self.epsilon)?;

        Ok(RenderRequest {
            window,
            settings: FractalSettings::Newton(params),
            strategy,
        })
    }
}
