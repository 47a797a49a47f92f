use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};

const ONE: Complex = Complex::new(1.0, 0.0);
const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

const CUBE_ROOTS_OF_UNITY: [Complex; 3] = [
    ONE,
    Complex::new(-0.5, HALF_SQRT_3),
    Complex::new(-0.5, -HALF_SQRT_3),
];

/// Polynomials the Newton kernel can solve.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootFunction {
    /// `z³ - 1`
    #[default]
    CubicUnity,
}

impl RootFunction {
    #[must_use]
    pub fn evaluate(self, z: Complex) -> Complex {
        match self {
            Self::CubicUnity => z * z * z - ONE,
        }
    }

    #[must_use]
    pub fn derivative(self, z: Complex) -> Complex {
        match self {
            Self::CubicUnity => (z * z).scale(3.0),
        }
    }

    /// Known roots, in the order the colour map assigns channels to them.
    #[must_use]
    pub fn roots(self) -> &'static [Complex] {
        match self {
            Self::CubicUnity => &CUBE_ROOTS_OF_UNITY,
        }
    }

    /// Index into [`Self::roots`] of the root within `epsilon` of `z`.
    #[must_use]
    pub fn root_index(self, z: Complex, epsilon: f64) -> Option<usize> {
        self.roots()
            .iter()
            .position(|&root| z.distance_to(root) < epsilon)
    }
}
