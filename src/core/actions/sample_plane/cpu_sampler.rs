use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::sample_plane::ports::sampler_backend::SamplerBackend;
use crate::core::actions::sample_plane::sample_plane::{SamplePlaneError, sample_plane};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::fractal_settings::FractalSettings;
use crate::core::fractals::lyapunov::algorithm::LyapunovAlgorithm;
use crate::core::fractals::lyapunov::colour_map::LyapunovColourMap;
use crate::core::fractals::newton::algorithm::NewtonAlgorithm;
use crate::core::fractals::newton::colour_map::NewtonRootColourMap;

/// Samples on the host CPU with the request's partition strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuSampler;

impl CpuSampler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SamplerBackend for CpuSampler {
    fn sample(
        &self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, SamplePlaneError> {
        match &request.settings {
            FractalSettings::Newton(params) => {
                let algorithm = NewtonAlgorithm::new(request.window, *params);
                let colour_map = NewtonRootColourMap::new(*params);

                sample_plane(&algorithm, &colour_map, request.strategy, cancel)
            }
            FractalSettings::Lyapunov(params) => {
                let algorithm = LyapunovAlgorithm::new(request.window, params.clone());
                let colour_map = LyapunovColourMap::new();

                sample_plane(&algorithm, &colour_map, request.strategy, cancel)
            }
        }
    }

    fn display_name(&self) -> &str {
        "CPU"
    }
}
