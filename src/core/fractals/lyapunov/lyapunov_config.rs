use crate::core::actions::generate_fractal::sampler_strategy::SamplerStrategy;
use crate::core::data::parameter_window::{ParameterWindow, WindowBounds};
use crate::core::data::render_request::{BuildRequestError, RenderRequest};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_settings::FractalSettings;
use crate::core::fractals::lyapunov::params::{DEFAULT_ITERATIONS, LyapunovParams};
use crate::core::fractals::lyapunov::sequence::{DEFAULT_SEQUENCE, LyapunovSequence};
use serde::{Deserialize, Serialize};

pub(crate) fn default_bounds() -> WindowBounds {
    WindowBounds {
        x_min: 2.0,
        x_max: 4.0,
        y_min: 2.0,
        y_max: 4.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LyapunovConfig {
    pub width: u32,
    pub height: u32,
    pub bounds: WindowBounds,
    /// A/B pattern; validated when the request is built, before any pass.
    pub sequence: String,
    pub iterations: u32,
}

impl Default for LyapunovConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 900,
            bounds: default_bounds(),
            sequence: DEFAULT_SEQUENCE.to_string(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl LyapunovConfig {
    pub fn build_render_request(
        &self,
        strategy: SamplerStrategy,
    ) -> Result<RenderRequest, BuildRequestError> {
        let sequence: LyapunovSequence = self.sequence.parse()?;
        let viewport = Viewport::new(self.width, self.height)?;
        let window = ParameterWindow::new(self.bounds, viewport)?;
        let params = LyapunovParams::new(sequence, self.iterations)?;

        Ok(RenderRequest {
            window,
            settings: FractalSettings::Lyapunov(params),
            strategy,
        })
    }
}
