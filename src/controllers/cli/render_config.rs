use crate::core::actions::generate_fractal::sampler_strategy::SamplerStrategy;
use crate::core::data::point::Point;
use crate::core::data::render_request::{BuildRequestError, RenderRequest};
use crate::core::data::zoom_event::ZoomConfig;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
use crate::core::fractals::newton::newton_config::NewtonConfig;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum RenderConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            Self::Parse(err) => write!(f, "failed to parse config: {}", err),
        }
    }
}

impl Error for RenderConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for RenderConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Repeated-zoom timing run. Defaults zoom in five times around (640, 360)
/// using the zoom-in ratio of the surrounding [`ZoomConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchmarkConfig {
    pub ratio: Option<f64>,
    pub anchor: Point,
    pub frames: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            ratio: None,
            anchor: Point { x: 640, y: 360 },
            frames: 5,
        }
    }
}

/// Everything the command-line renderer reads. Every field is optional in
/// JSON; unknown fields are an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub fractal: FractalKinds,
    pub strategy: SamplerStrategy,
    pub newton: NewtonConfig,
    pub lyapunov: LyapunovConfig,
    pub zoom: ZoomConfig,
    pub output: PathBuf,
    pub log_level: LevelFilter,
    pub benchmark: Option<BenchmarkConfig>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fractal: FractalKinds::default(),
            strategy: SamplerStrategy::default(),
            newton: NewtonConfig::default(),
            lyapunov: LyapunovConfig::default(),
            zoom: ZoomConfig::default(),
            output: PathBuf::from("output/fractal.ppm"),
            log_level: LevelFilter::Info,
            benchmark: None,
        }
    }
}

impl BenchmarkConfig {
    #[must_use]
    pub fn ratio_or(&self, zoom: &ZoomConfig) -> f64 {
        self.ratio.unwrap_or(zoom.zoom_in_ratio)
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, RenderConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RenderConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RenderConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    /// Validates the settings for the selected fractal into a render request.
    pub fn build_request(&self) -> Result<RenderRequest, BuildRequestError> {
        match self.fractal {
            FractalKinds::Newton => self.newton.build_render_request(self.strategy),
            FractalKinds::Lyapunov => self.lyapunov.build_render_request(self.strategy),
        }
    }
}
