use std::ops::Range;
use std::thread;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal_serial::compute_rows;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::util::calculate_threads_for_viewport_banding::calculate_threads_for_viewport_banding;

fn band_rows(band_num: u32, band_height: u32, total_bands: u32, height: u32) -> Range<u32> {
    let band_top = band_num * band_height;

    // Last band takes any remainder rows
    let band_bottom = if band_num == total_bands - 1 {
        height
    } else {
        (band_num + 1) * band_height
    };

    band_top..band_bottom
}

/// Splits the viewport into one contiguous band of rows per available thread.
pub fn generate_fractal_parallel_scoped_threads<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken + ?Sized,
{
    let viewport = algorithm.viewport();
    let num_threads = calculate_threads_for_viewport_banding(viewport);
    let band_height = viewport.height() / num_threads;

    let bands = thread::scope(|scope| {
        let handles = (0..num_threads)
            .map(|band_num| {
                let rows = band_rows(band_num, band_height, num_threads, viewport.height());
                scope.spawn(move || compute_rows(rows, algorithm, cancel))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(band) => band,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect::<Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>>>()
    })?;

    Ok(bands.into_iter().flatten().collect())
}
