use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::controllers::cli::render_config::BenchmarkConfig;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::sample_plane::ports::sampler_backend::SamplerBackend;
use crate::core::actions::sample_plane::sample_plane::SamplePlaneError;
use crate::core::data::parameter_window::{ParameterWindow, ParameterWindowError};
use crate::core::data::render_request::RenderRequest;
use crate::core::data::zoom_event::{ZoomConfig, ZoomEvent};

#[derive(Debug)]
pub enum ZoomBenchmarkError {
    Window { frame: u32, source: ParameterWindowError },
    Sample { frame: u32, source: SamplePlaneError },
}

impl fmt::Display for ZoomBenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window { frame, source } => {
                write!(f, "zoom before frame {} failed: {}", frame, source)
            }
            Self::Sample { frame, source } => write!(f, "frame {} failed: {}", frame, source),
        }
    }
}

impl Error for ZoomBenchmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Window { source, .. } => Some(source),
            Self::Sample { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub frame_durations: Vec<Duration>,
    pub final_window: ParameterWindow,
}

impl BenchmarkReport {
    #[must_use]
    pub fn total(&self) -> Duration {
        self.frame_durations.iter().sum()
    }

    #[must_use]
    pub fn mean(&self) -> Option<Duration> {
        let frames = u32::try_from(self.frame_durations.len()).ok()?;
        (frames > 0).then(|| self.total() / frames)
    }
}

/// Zooms by the same ratio at the same anchor `frames` times, resampling the
/// plane after every step and timing each pass.
pub struct ZoomBenchmark<B: SamplerBackend> {
    backend: B,
    config: BenchmarkConfig,
    ratio: f64,
}

impl<B: SamplerBackend> ZoomBenchmark<B> {
    /// Without an explicit ratio in `config` the benchmark zooms by
    /// `zoom.zoom_in_ratio`.
    pub fn new(backend: B, config: BenchmarkConfig, zoom: &ZoomConfig) -> Self {
        Self {
            backend,
            config,
            ratio: config.ratio_or(zoom),
        }
    }

    pub fn run(&self, request: &RenderRequest) -> Result<BenchmarkReport, ZoomBenchmarkError> {
        let zoom = ZoomEvent::new(self.ratio, self.config.anchor);
        let mut current = request.clone();
        let mut frame_durations = Vec::with_capacity(self.config.frames as usize);

        for frame in 1..=self.config.frames {
            current.window = current
                .window
                .reframe(zoom)
                .map_err(|source| ZoomBenchmarkError::Window { frame, source })?;

            let start = Instant::now();
            self.backend
                .sample(&current, &NeverCancel)
                .map_err(|source| ZoomBenchmarkError::Sample { frame, source })?;
            let elapsed = start.elapsed();

            log::info!("frame {}/{}: {:.2?}", frame, self.config.frames, elapsed);
            frame_durations.push(elapsed);
        }

        Ok(BenchmarkReport {
            frame_durations,
            final_window: current.window,
        })
    }
}
