use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LyapunovError {
    ZeroIterationsError,
}

impl fmt::Display for LyapunovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationsError => {
                write!(f, "Lyapunov iteration budget must be greater than zero")
            }
        }
    }
}

impl Error for LyapunovError {}
