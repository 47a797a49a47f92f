use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::lyapunov::kernel::LyapunovResult;

const STABLE_INTENSITY: f64 = 128.0;
const STABLE_FALLOFF: f64 = 1.5;

/// `#B8860B`
pub const CHAOTIC_GOLD: Colour = Colour::opaque(0xB8, 0x86, 0x0B);

/// Negative exponents shade toward blue-green, brighter the closer they are
/// to zero; zero and above is flat dark gold. Invalid results carry a
/// negative sentinel and shade as stable.
#[derive(Debug, Default)]
pub struct LyapunovColourMap;

impl LyapunovColourMap {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ColourMap<LyapunovResult> for LyapunovColourMap {
    fn map(&self, result: LyapunovResult) -> Colour {
        if result.exponent < 0.0 {
            let falloff = (1.0 - (result.exponent / STABLE_FALLOFF).abs()).max(0.0);
            let intensity = (STABLE_INTENSITY * falloff) as u8;

            Colour::opaque(0, intensity, intensity)
        } else {
            CHAOTIC_GOLD
        }
    }

    fn display_name(&self) -> &str {
        "Stability"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::OPAQUE;

    fn result(exponent: f64) -> LyapunovResult {
        LyapunovResult {
            exponent,
            valid: true,
        }
    }

    #[test]
    fn test_chaotic_is_dark_gold() {
        let mapper = LyapunovColourMap::new();

        assert_eq!(mapper.map(result(0.0)).to_rgba8888(), 0xB886_0BFF);
        assert_eq!(mapper.map(result(0.4)), CHAOTIC_GOLD);
    }

    #[test]
    fn test_stable_intensity_scales_with_exponent() {
        let mapper = LyapunovColourMap::new();

        assert_eq!(mapper.map(result(-0.75)), Colour::opaque(0, 64, 64));
        assert_eq!(mapper.map(result(-1e-9)), Colour::opaque(0, 127, 127));
    }

    #[test]
    fn test_strongly_stable_bottoms_out() {
        let mapper = LyapunovColourMap::new();

        assert_eq!(mapper.map(result(-1.5)), Colour::opaque(0, 0, 0));
        assert_eq!(mapper.map(result(-40.0)), Colour::opaque(0, 0, 0));
    }

    #[test]
    fn test_invalid_sentinel_maps_as_stable() {
        let mapper = LyapunovColourMap::new();

        assert_eq!(mapper.map(LyapunovResult::INVALID), Colour::opaque(0, 42, 42));
    }

    #[test]
    fn test_every_output_is_opaque() {
        let mapper = LyapunovColourMap::new();
        let exponents = [
            f64::NEG_INFINITY,
            -1e300,
            -1.0,
            -0.0,
            0.0,
            1e300,
            f64::INFINITY,
            f64::NAN,
        ];

        for exponent in exponents {
            for valid in [true, false] {
                assert_eq!(mapper.map(LyapunovResult { exponent, valid }).a, OPAQUE);
            }
        }
    }
}
