use serde::{Deserialize, Serialize};
use std::fmt;

/// How a sampling pass distributes rows across threads.
///
/// Every strategy produces the same buffer for the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerStrategy {
    /// One thread, rows top to bottom.
    Serial,
    /// One contiguous band of rows per available core.
    StaticBands,
    /// Rows handed out dynamically by a work-stealing pool.
    #[default]
    WorkStealing,
}

impl SamplerStrategy {
    pub const ALL: [SamplerStrategy; 3] = [
        SamplerStrategy::Serial,
        SamplerStrategy::StaticBands,
        SamplerStrategy::WorkStealing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SamplerStrategy::Serial => "Serial",
            SamplerStrategy::StaticBands => "Static bands",
            SamplerStrategy::WorkStealing => "Work stealing",
        }
    }

    /// Flips between the two parallel strategies. `Serial` moves to
    /// `StaticBands`.
    pub fn toggled(&self) -> SamplerStrategy {
        match self {
            SamplerStrategy::StaticBands => SamplerStrategy::WorkStealing,
            SamplerStrategy::WorkStealing | SamplerStrategy::Serial => SamplerStrategy::StaticBands,
        }
    }
}

impl fmt::Display for SamplerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_work_stealing() {
        assert_eq!(SamplerStrategy::default(), SamplerStrategy::WorkStealing);
    }

    #[test]
    fn test_toggle_alternates_parallel_strategies() {
        assert_eq!(SamplerStrategy::WorkStealing.toggled(), SamplerStrategy::StaticBands);
        assert_eq!(SamplerStrategy::StaticBands.toggled(), SamplerStrategy::WorkStealing);
        assert_eq!(SamplerStrategy::Serial.toggled(), SamplerStrategy::StaticBands);
    }

    #[test]
    fn test_deserializes_snake_case() {
        let strategy: SamplerStrategy = serde_json::from_str("\"static_bands\"").unwrap();

        assert_eq!(strategy, SamplerStrategy::StaticBands);
    }
}
