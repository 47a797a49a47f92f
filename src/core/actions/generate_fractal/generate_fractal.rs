use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_parallel_scoped_threads::generate_fractal_parallel_scoped_threads;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::sampler_strategy::SamplerStrategy;

/// Runs `algorithm` over every pixel of its viewport using `strategy`.
///
/// The output is row-major and identical for every strategy.
pub fn generate_fractal<Alg, C>(
    algorithm: &Alg,
    strategy: SamplerStrategy,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken + ?Sized,
{
    match strategy {
        SamplerStrategy::Serial => generate_fractal_serial(algorithm, cancel),
        SamplerStrategy::StaticBands => generate_fractal_parallel_scoped_threads(algorithm, cancel),
        SamplerStrategy::WorkStealing => generate_fractal_parallel_rayon(algorithm, cancel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::test_support::{
        StubFailureAlgorithm, StubSuccessAlgorithm,
    };

    #[test]
    fn test_every_strategy_produces_identical_output() {
        let algorithm = StubSuccessAlgorithm::new(37, 23);
        let expected = generate_fractal(&algorithm, SamplerStrategy::Serial, &NeverCancel).unwrap();

        for strategy in SamplerStrategy::ALL {
            let results = generate_fractal(&algorithm, strategy, &NeverCancel).unwrap();
            assert_eq!(results, expected, "strategy {} diverged", strategy);
        }
    }

    #[test]
    fn test_every_strategy_reports_failure() {
        let algorithm = StubFailureAlgorithm::new(8, 8);

        for strategy in SamplerStrategy::ALL {
            let result = generate_fractal(&algorithm, strategy, &NeverCancel);
            assert!(matches!(result, Err(GenerateFractalError::Algorithm(_))));
        }
    }

    #[test]
    fn test_every_strategy_honours_cancellation() {
        let algorithm = StubSuccessAlgorithm::new(8, 8);

        for strategy in SamplerStrategy::ALL {
            let result = generate_fractal(&algorithm, strategy, &|| true);
            assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
        }
    }
}
