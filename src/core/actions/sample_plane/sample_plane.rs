use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::sampler_strategy::SamplerStrategy;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SamplePlaneError {
    Cancelled(Cancelled),
    Algorithm(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl SamplePlaneError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl fmt::Display for SamplePlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for SamplePlaneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<GenerateFractalError<E>> for SamplePlaneError
where
    E: Error + Send + Sync + 'static,
{
    fn from(err: GenerateFractalError<E>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Algorithm(Box::new(e)),
        }
    }
}

impl From<GeneratePixelBufferError> for SamplePlaneError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}

/// Runs the kernel pass then the colour pass into a fresh buffer.
///
/// The buffer is only handed back once every pixel is written, so a
/// cancelled or failed pass never leaves a partial image behind.
pub fn sample_plane<Alg, CMap, C>(
    algorithm: &Alg,
    colour_map: &CMap,
    strategy: SamplerStrategy,
    cancel: &C,
) -> Result<PixelBuffer, SamplePlaneError>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + Sync + 'static,
    CMap: ColourMap<Alg::Success> + ?Sized,
    C: CancelToken + ?Sized,
{
    let values = generate_fractal(algorithm, strategy, cancel)?;

    Ok(generate_pixel_buffer(
        values,
        colour_map,
        algorithm.viewport(),
        cancel,
    )?)
}
