use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SEQUENCE: &str = "AABAB";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LyapunovSymbol {
    A,
    B,
}

impl LyapunovSymbol {
    /// Picks the growth rate this symbol selects.
    #[must_use]
    pub fn rate(self, a: f64, b: f64) -> f64 {
        match self {
            Self::A => a,
            Self::B => b,
        }
    }
}

impl TryFrom<char> for LyapunovSymbol {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyapunovSequenceError {
    Empty,
    InvalidSymbol { symbol: char, position: usize },
}

impl fmt::Display for LyapunovSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "lyapunov sequence must not be empty"),
            Self::InvalidSymbol { symbol, position } => {
                write!(
                    f,
                    "lyapunov sequence symbol {:?} at position {} is not 'A' or 'B'",
                    symbol, position
                )
            }
        }
    }
}

impl Error for LyapunovSequenceError {}

/// The non-empty A/B pattern choosing which growth rate drives each step.
/// Read cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyapunovSequence {
    symbols: Vec<LyapunovSymbol>,
}

impl LyapunovSequence {
    #[must_use]
    pub fn symbols(&self) -> &[LyapunovSymbol] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromStr for LyapunovSequence {
    type Err = LyapunovSequenceError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(LyapunovSequenceError::Empty);
        }

        let symbols = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                LyapunovSymbol::try_from(symbol)
                    .map_err(|symbol| LyapunovSequenceError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { symbols })
    }
}

impl Default for LyapunovSequence {
    fn default() -> Self {
        Self {
            symbols: vec![
                LyapunovSymbol::A,
                LyapunovSymbol::A,
                LyapunovSymbol::B,
                LyapunovSymbol::A,
                LyapunovSymbol::B,
            ],
        }
    }
}

impl fmt::Display for LyapunovSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| match symbol {
            LyapunovSymbol::A => f.write_str("A"),
            LyapunovSymbol::B => f.write_str("B"),
        })
    }
}
