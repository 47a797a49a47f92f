use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NewtonError {
    ZeroMaxIterationsError,
    InvalidEpsilon(f64),
}

impl fmt::Display for NewtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEpsilon(epsilon) => {
                write!(f, "Convergence threshold must be positive and finite, got {}", epsilon)
            }
        }
    }
}

impl Error for NewtonError {}
