use rayon::prelude::*;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal_serial::compute_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Hands each row to rayon's work-stealing pool.
pub fn generate_fractal_parallel_rayon<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken + ?Sized,
{
    let rows = (0..algorithm.viewport().height())
        .into_par_iter()
        .map(|y| compute_row(y, algorithm, cancel))
        .collect::<Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>>>()?;

    Ok(rows.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::actions::generate_fractal::test_support::{
        StubFailureAlgorithm, StubSuccessAlgorithm,
    };
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm::new(13, 17);
        let serial_results = generate_fractal_serial(&algorithm, &NeverCancel).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(&algorithm, &NeverCancel).unwrap();

        assert_eq!(rayon_results, serial_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm::new(9, 9);
        let result = generate_fractal_parallel_rayon(&algorithm, &NeverCancel);

        assert!(matches!(result, Err(GenerateFractalError::Algorithm(_))));
    }

    #[test]
    fn test_rayon_returns_cancelled_when_flag_set() {
        let flag = AtomicBool::new(true);
        let algorithm = StubSuccessAlgorithm::new(9, 9);
        let result = generate_fractal_parallel_rayon(&algorithm, &|| flag.load(Ordering::Relaxed));

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }
}
