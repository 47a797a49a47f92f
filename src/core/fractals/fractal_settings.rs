use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::lyapunov::params::LyapunovParams;
use crate::core::fractals::newton::params::NewtonParams;

/// Algorithm-specific parameters; the plane window travels separately.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalSettings {
    Newton(NewtonParams),
    Lyapunov(LyapunovParams),
}

impl FractalSettings {
    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Newton(_) => FractalKinds::Newton,
            Self::Lyapunov(_) => FractalKinds::Lyapunov,
        }
    }
}
