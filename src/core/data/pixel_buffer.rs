use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        viewport: Viewport,
    },
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                viewport_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "viewport size {} does not match buffer size {}",
                    viewport_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, viewport } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} viewport",
                    pixel.x,
                    pixel.y,
                    viewport.width(),
                    viewport.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Packed `0xRRGGBBAA` words, row-major, stride = viewport width.
pub type PixelBufferData = Vec<u32>;

#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![0; viewport.size()],
        }
    }

    pub fn from_data(
        viewport: Viewport,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if viewport.size() != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                viewport_size: viewport.size(),
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { viewport, buffer })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.viewport
            .index_of(pixel)
            .map(|index| Colour::from_rgba8888(self.buffer[index]))
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .viewport
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            })?;

        self.buffer[index] = colour.to_rgba8888();

        Ok(())
    }

    /// Flattens the buffer to 3 bytes per pixel, dropping alpha.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.buffer
            .iter()
            .flat_map(|&packed| {
                let Colour { r, g, b, .. } = Colour::from_rgba8888(packed);
                [r, g, b]
            })
            .collect()
    }
}
