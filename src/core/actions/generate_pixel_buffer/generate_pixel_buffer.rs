use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

/// Error type for cancel-aware pixel buffer generation.
#[derive(Debug)]
pub enum GeneratePixelBufferError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// The input did not cover the viewport exactly.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps row-major kernel results to packed colours.
///
/// Checks `cancel` every [`CANCEL_CHECK_INTERVAL_PIXELS`] values. Nothing is
/// returned unless every pixel has been coloured.
pub fn generate_pixel_buffer<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    viewport: Viewport,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T> + ?Sized,
    C: CancelToken + ?Sized,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(viewport.size());

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        buffer.push(mapper.map(value).to_rgba8888());
    }

    Ok(PixelBuffer::from_data(viewport, buffer)?)
}
