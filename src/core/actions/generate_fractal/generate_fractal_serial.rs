use std::ops::Range;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes one row, polling `cancel` at the row start and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels after that.
pub(crate) fn compute_row<Alg, C>(
    y: u32,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken + ?Sized,
{
    let width = algorithm.viewport().width();
    let mut row = Vec::with_capacity(width as usize);

    for (i, x) in (0..width).enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GenerateFractalError::Cancelled(Cancelled));
        }

        let result = algorithm
            .compute(Point {
                x: x as i32,
                y: y as i32,
            })
            .map_err(GenerateFractalError::Algorithm)?;
        row.push(result);
    }

    Ok(row)
}

/// Computes `rows` top to bottom into one row-major vector.
pub(crate) fn compute_rows<Alg, C>(
    rows: Range<u32>,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken + ?Sized,
{
    let width = algorithm.viewport().width() as usize;
    let mut results = Vec::with_capacity(rows.len() * width);

    for y in rows {
        results.extend(compute_row(y, algorithm, cancel)?);
    }

    Ok(results)
}

pub fn generate_fractal_serial<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken + ?Sized,
{
    compute_rows(0..algorithm.viewport().height(), algorithm, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::test_support::{
        StubFailureAlgorithm, StubSuccessAlgorithm,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_serial_is_row_major() {
        let algorithm = StubSuccessAlgorithm::new(3, 2);
        let results = generate_fractal_serial(&algorithm, &NeverCancel).unwrap();

        // (x, y) encoded as y * 100 + x
        assert_eq!(results, vec![0, 1, 2, 100, 101, 102]);
    }

    #[test]
    fn test_serial_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm::new(3, 3);
        let result = generate_fractal_serial(&algorithm, &NeverCancel);

        assert!(matches!(result, Err(GenerateFractalError::Algorithm(_))));
    }

    #[test]
    fn test_serial_returns_cancelled() {
        let algorithm = StubSuccessAlgorithm::new(3, 3);
        let result = generate_fractal_serial(&algorithm, &|| true);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancellation_polled_at_each_row_start_and_interval() {
        let algorithm = StubSuccessAlgorithm::new(2500, 2);
        let polls = AtomicUsize::new(0);
        let cancel = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        generate_fractal_serial(&algorithm, &cancel).unwrap();

        // pixels 0, 1024 and 2048 of each row
        assert_eq!(polls.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_compute_rows_covers_only_requested_rows() {
        let algorithm = StubSuccessAlgorithm::new(2, 4);
        let results = compute_rows(1..3, &algorithm, &NeverCancel).unwrap();

        assert_eq!(results, vec![100, 101, 200, 201]);
    }
}
