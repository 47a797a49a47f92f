use crate::core::actions::generate_fractal::sampler_strategy::SamplerStrategy;
use crate::core::data::parameter_window::{ParameterWindow, ParameterWindowError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::fractal_settings::FractalSettings;
use crate::core::fractals::lyapunov::errors::LyapunovError;
use crate::core::fractals::lyapunov::sequence::LyapunovSequenceError;
use crate::core::fractals::newton::errors::NewtonError;
use std::error::Error;
use std::fmt;

/// Everything one recompute pass reads, captured as an immutable snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub window: ParameterWindow,
    pub settings: FractalSettings,
    pub strategy: SamplerStrategy,
}

impl RenderRequest {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.window.viewport()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuildRequestError {
    Viewport(ViewportError),
    Window(ParameterWindowError),
    Newton(NewtonError),
    Lyapunov(LyapunovError),
    Sequence(LyapunovSequenceError),
}

impl fmt::Display for BuildRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Window(err) => write!(f, "invalid parameter window: {}", err),
            Self::Newton(err) => write!(f, "invalid newton settings: {}", err),
            Self::Lyapunov(err) => write!(f, "invalid lyapunov settings: {}", err),
            Self::Sequence(err) => write!(f, "invalid lyapunov sequence: {}", err),
        }
    }
}

impl Error for BuildRequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Newton(err) => Some(err),
            Self::Lyapunov(err) => Some(err),
            Self::Sequence(err) => Some(err),
        }
    }
}

impl From<ViewportError> for BuildRequestError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<ParameterWindowError> for BuildRequestError {
    fn from(err: ParameterWindowError) -> Self {
        Self::Window(err)
    }
}

impl From<NewtonError> for BuildRequestError {
    fn from(err: NewtonError) -> Self {
        Self::Newton(err)
    }
}

impl From<LyapunovError> for BuildRequestError {
    fn from(err: LyapunovError) -> Self {
        Self::Lyapunov(err)
    }
}

impl From<LyapunovSequenceError> for BuildRequestError {
    fn from(err: LyapunovSequenceError) -> Self {
        Self::Sequence(err)
    }
}
