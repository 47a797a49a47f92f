use std::ops::{Add, Div, Mul, Sub};

// own Complex instead of num-complex; only the handful of operations the kernels need
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self - other).magnitude()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Div for Complex {
    type Output = Self;

    // (a + bi) / (c + di) = ((ac + bd) + (bc - ad)i) / (c² + d²)
    fn div(self, other: Self) -> Self {
        let denominator = other.magnitude_squared();

        Self {
            real: (self.real * other.real + self.imag * other.imag) / denominator,
            imag: (self.imag * other.real - self.real * other.imag) / denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_real_and_imag() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Complex::new(3.0, -4.0).magnitude(), 5.0);
        assert_eq!(Complex::default().magnitude(), 0.0);
    }

    #[test]
    fn test_add_and_sub() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(-3.0, -7.0);

        assert_eq!(a + b, Complex::new(-2.0, -5.0));
        assert_eq!(a - b, Complex::new(4.0, 9.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let c = Complex::new(2.0, 3.0);
        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_div() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i
        let result = Complex::new(-5.0, 10.0) / Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_div_by_real() {
        let result = Complex::new(6.0, -3.0) / Complex::new(3.0, 0.0);
        assert_eq!(result, Complex::new(2.0, -1.0));
    }

    #[test]
    fn test_div_by_zero_is_not_finite() {
        let result = Complex::new(1.0, 1.0) / Complex::default();
        assert!(!result.real.is_finite());
    }

    #[test]
    fn test_scale() {
        assert_eq!(Complex::new(1.5, -2.0).scale(2.0), Complex::new(3.0, -4.0));
    }

    #[test]
    fn test_distance_to() {
        let a = Complex::new(1.0, 1.0);
        let b = Complex::new(4.0, 5.0);
        assert_eq!(a.distance_to(b), 5.0);
    }
}
