use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::newton::kernel::NewtonResult;
use crate::core::fractals::newton::params::NewtonParams;

const MIN_BRIGHTNESS: f64 = 0.1;

/// Shades each root's basin in its own channel (red, green, blue in root
/// order), brighter for faster convergence. Anything unresolved is black.
#[derive(Debug)]
pub struct NewtonRootColourMap {
    params: NewtonParams,
}

impl NewtonRootColourMap {
    #[must_use]
    pub fn new(params: NewtonParams) -> Self {
        Self { params }
    }

    fn brightness(&self, iterations: u32) -> u8 {
        let t = f64::from(iterations) / f64::from(self.params.max_iterations());
        (255.0 * (1.0 - t).max(MIN_BRIGHTNESS)) as u8
    }
}

impl ColourMap<NewtonResult> for NewtonRootColourMap {
    fn map(&self, result: NewtonResult) -> Colour {
        if !result.converged || result.iterations >= self.params.max_iterations() {
            return Colour::BLACK;
        }

        let root = self
            .params
            .function()
            .root_index(result.point, self.params.epsilon());
        let brightness = self.brightness(result.iterations);

        match root {
            Some(0) => Colour::opaque(brightness, 0, 0),
            Some(1) => Colour::opaque(0, brightness, 0),
            Some(2) => Colour::opaque(0, 0, brightness),
            _ => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        "Root basins"
    }
}
