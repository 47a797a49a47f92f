use crate::core::data::complex::Complex;
use crate::core::fractals::newton::root_function::RootFunction;
use std::ops::ControlFlow;

/// Outcome of one Newton iteration run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonResult {
    pub iterations: u32,
    pub point: Complex,
    pub converged: bool,
}

/// Runs `z <- z - P(z) / P'(z)` from `z0` for at most `max_iterations` steps.
///
/// Stops at step `i` once the step size drops below `epsilon`, returning `i`
/// and the last iterate. A derivative smaller than `epsilon` ends the run as
/// non-convergent with `max_iterations`.
#[must_use]
pub fn newton(
    z0: Complex,
    function: RootFunction,
    max_iterations: u32,
    epsilon: f64,
) -> NewtonResult {
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        let slope = function.derivative(z);

        if slope.magnitude() < epsilon {
            return ControlFlow::Break(NewtonResult {
                iterations: max_iterations,
                point: z,
                converged: false,
            });
        }

        let next = z - function.evaluate(z) / slope;

        if next.distance_to(z) < epsilon {
            ControlFlow::Break(NewtonResult {
                iterations: iteration,
                point: next,
                converged: true,
            })
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(result) => result,
        ControlFlow::Continue(point) => NewtonResult {
            iterations: max_iterations,
            point,
            converged: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_ITERATIONS: u32 = 100;
    const EPSILON: f64 = 1e-5;

    fn step(z: Complex, function: RootFunction) -> Complex {
        z - function.evaluate(z) / function.derivative(z)
    }

    #[test]
    fn test_two_converges_to_one_quickly() {
        let result = newton(
            Complex::new(2.0, 0.0),
            RootFunction::CubicUnity,
            MAX_ITERATIONS,
            EPSILON,
        );

        assert!(result.converged);
        assert!(result.iterations < 20, "took {} iterations", result.iterations);
        assert!(result.point.distance_to(Complex::new(1.0, 0.0)) < EPSILON);
    }

    #[test]
    fn test_converged_point_is_within_epsilon_of_previous_iterate() {
        let function = RootFunction::CubicUnity;
        let starts = [
            Complex::new(2.0, 0.0),
            Complex::new(-1.0, 1.0),
            Complex::new(0.3, -0.9),
            Complex::new(-2.0, -2.0),
        ];

        for z0 in starts {
            let result = newton(z0, function, MAX_ITERATIONS, EPSILON);
            assert!(result.converged, "{:?} did not converge", z0);
            assert!(result.iterations < MAX_ITERATIONS);

            let previous = (0..result.iterations).fold(z0, |z, _| step(z, function));
            assert!(result.point.distance_to(previous) < EPSILON);
            assert_eq!(result.point, step(previous, function));
        }
    }

    #[test]
    fn test_far_starting_points_still_reach_a_root() {
        let function = RootFunction::CubicUnity;
        let starts = [
            Complex::new(-1.0, 1.0),
            Complex::new(-0.5, 86.6),
            Complex::new(7.5, -0.866),
        ];

        for z0 in starts {
            let result = newton(z0, function, MAX_ITERATIONS, EPSILON);
            assert!(result.converged, "{:?} did not converge", z0);
            assert!(function.root_index(result.point, EPSILON).is_some());
        }
    }

    #[test]
    fn test_zero_derivative_is_non_convergent() {
        let result = newton(Complex::default(), RootFunction::CubicUnity, MAX_ITERATIONS, EPSILON);

        assert!(!result.converged);
        assert_eq!(result.iterations, MAX_ITERATIONS);
        assert_eq!(result.point, Complex::default());
    }

    #[test]
    fn test_budget_exhaustion_is_non_convergent() {
        let result = newton(Complex::new(-0.5, 86.6), RootFunction::CubicUnity, 3, EPSILON);

        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_zero_budget_returns_start() {
        let z0 = Complex::new(2.0, 0.0);
        let result = newton(z0, RootFunction::CubicUnity, 0, EPSILON);

        assert_eq!(
            result,
            NewtonResult {
                iterations: 0,
                point: z0,
                converged: false
            }
        );
    }

    #[test]
    fn test_is_deterministic() {
        let z0 = Complex::new(-0.31, 0.77);
        let first = newton(z0, RootFunction::CubicUnity, MAX_ITERATIONS, EPSILON);
        let second = newton(z0, RootFunction::CubicUnity, MAX_ITERATIONS, EPSILON);

        assert_eq!(first, second);
    }
}
