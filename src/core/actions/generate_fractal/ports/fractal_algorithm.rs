use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;

/// Per-pixel evaluation of one fractal over a fixed viewport.
///
/// `compute` must be a pure function of `pixel`, so pixels may be evaluated in
/// any order and on any thread.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn viewport(&self) -> Viewport;
}
