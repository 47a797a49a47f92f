use crate::core::fractals::lyapunov::sequence::LyapunovSymbol;

pub const INITIAL_X: f64 = 0.5;
pub const INVALID_EXPONENT: f64 = -1.0;
pub const MIN_DERIVATIVE: f64 = 1e-6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LyapunovResult {
    pub exponent: f64,
    pub valid: bool,
}

impl LyapunovResult {
    pub const INVALID: Self = Self {
        exponent: INVALID_EXPONENT,
        valid: false,
    };
}

/// Mean of `ln|r (1 - 2x)|` along the logistic orbit `x <- r x (1 - x)`,
/// where `r` is `a` or `b` as the cyclic `symbols` dictate.
///
/// Returns [`LyapunovResult::INVALID`] for an empty sequence or budget, when
/// the orbit leaves `(0, 1)`, or when the derivative gets too close to zero
/// to take its log.
#[must_use]
pub fn lyapunov_exponent(
    symbols: &[LyapunovSymbol],
    a: f64,
    b: f64,
    iterations: u32,
) -> LyapunovResult {
    if symbols.is_empty() || iterations == 0 {
        return LyapunovResult::INVALID;
    }

    let mut x = INITIAL_X;
    let mut sum = 0.0;

    for symbol in symbols.iter().cycle().take(iterations as usize) {
        let r = symbol.rate(a, b);
        x = r * x * (1.0 - x);

        // negated so NaN also counts as escaped
        if !(x > 0.0 && x < 1.0) {
            return LyapunovResult::INVALID;
        }

        let derivative = (r * (1.0 - 2.0 * x)).abs();
        if derivative < MIN_DERIVATIVE {
            return LyapunovResult::INVALID;
        }

        sum += derivative.ln();
    }

    LyapunovResult {
        exponent: sum / f64::from(iterations),
        valid: true,
    }
}
