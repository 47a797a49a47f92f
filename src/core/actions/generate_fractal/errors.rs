use crate::core::actions::cancellation::Cancelled;

/// Error type for cancel-aware fractal generation.
///
/// Keeps cancellation apart from algorithm failures so callers can treat a
/// superseded pass as normal control flow.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    /// The pass was cancelled before completion.
    Cancelled(Cancelled),
    /// The fractal algorithm reported a failure.
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Cancelled(c) => write!(f, "{}", c),
            GenerateFractalError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Cancelled(c) => Some(c),
            GenerateFractalError::Algorithm(e) => Some(e),
        }
    }
}
