use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct StubError {}

impl fmt::Display for StubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StubError")
    }
}

impl Error for StubError {}

/// Encodes each pixel as `y * 100 + x`.
#[derive(Debug)]
pub struct StubSuccessAlgorithm {
    viewport: Viewport,
}

impl StubSuccessAlgorithm {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height).unwrap(),
        }
    }
}

impl FractalAlgorithm for StubSuccessAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok((pixel.y * 100 + pixel.x) as u64)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Fails on the centre pixel of its viewport.
#[derive(Debug)]
pub struct StubFailureAlgorithm {
    viewport: Viewport,
}

impl StubFailureAlgorithm {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height).unwrap(),
        }
    }
}

impl FractalAlgorithm for StubFailureAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let centre = Point {
            x: (self.viewport.width() / 2) as i32,
            y: (self.viewport.height() / 2) as i32,
        };

        if pixel == centre {
            Err(StubError {})
        } else {
            Ok(0)
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
