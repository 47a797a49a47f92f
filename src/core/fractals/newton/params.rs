use crate::core::fractals::newton::{errors::NewtonError, root_function::RootFunction};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_EPSILON: f64 = 1e-5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonParams {
    function: RootFunction,
    max_iterations: u32,
    epsilon: f64,
}

impl NewtonParams {
    pub fn new(
        function: RootFunction,
        max_iterations: u32,
        epsilon: f64,
    ) -> Result<Self, NewtonError> {
        if max_iterations == 0 {
            return Err(NewtonError::ZeroMaxIterationsError);
        }

        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(NewtonError::InvalidEpsilon(epsilon));
        }

        Ok(Self {
            function,
            max_iterations,
            epsilon,
        })
    }

    pub fn function(&self) -> RootFunction {
        self.function
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self {
            function: RootFunction::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_iterations() {
        assert_eq!(
            NewtonParams::new(RootFunction::CubicUnity, 0, 1e-5),
            Err(NewtonError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_rejects_non_positive_epsilon() {
        assert_eq!(
            NewtonParams::new(RootFunction::CubicUnity, 10, 0.0),
            Err(NewtonError::InvalidEpsilon(0.0))
        );
        assert!(NewtonParams::new(RootFunction::CubicUnity, 10, f64::NAN).is_err());
    }

    #[test]
    fn test_default_matches_reference_constants() {
        let params = NewtonParams::default();

        assert_eq!(params.max_iterations(), 100);
        assert_eq!(params.epsilon(), 1e-5);
        assert_eq!(params.function(), RootFunction::CubicUnity);
    }
}
