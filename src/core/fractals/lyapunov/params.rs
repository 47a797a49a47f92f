use crate::core::fractals::lyapunov::errors::LyapunovError;
use crate::core::fractals::lyapunov::sequence::LyapunovSequence;

pub const DEFAULT_ITERATIONS: u32 = 6000;

#[derive(Debug, Clone, PartialEq)]
pub struct LyapunovParams {
    sequence: LyapunovSequence,
    iterations: u32,
}

impl LyapunovParams {
    pub fn new(sequence: LyapunovSequence, iterations: u32) -> Result<Self, LyapunovError> {
        if iterations == 0 {
            return Err(LyapunovError::ZeroIterationsError);
        }

        Ok(Self {
            sequence,
            iterations,
        })
    }

    pub fn sequence(&self) -> &LyapunovSequence {
        &self.sequence
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for LyapunovParams {
    fn default() -> Self {
        Self {
            sequence: LyapunovSequence::default(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}
