use crate::core::data::point::Point;
use serde::{Deserialize, Serialize};

/// A zoom gesture: `ratio` of the current range to remove (negative to add),
/// anchored at a pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomEvent {
    pub ratio: f64,
    pub anchor: Point,
}

impl ZoomEvent {
    #[must_use]
    pub const fn new(ratio: f64, anchor: Point) -> Self {
        Self { ratio, anchor }
    }

    #[must_use]
    pub fn from_direction(direction: ZoomDirection, anchor: Point, config: &ZoomConfig) -> Self {
        let ratio = match direction {
            ZoomDirection::In => config.zoom_in_ratio,
            ZoomDirection::Out => config.zoom_out_ratio,
        };

        Self { ratio, anchor }
    }

    /// The event that undoes this one when applied at the same anchor.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            ratio: inverse_zoom_ratio(self.ratio),
            anchor: self.anchor,
        }
    }
}

/// Ratio that undoes a zoom by `ratio`: a zoom leaves `1 - ratio` of the range,
/// so the undo must leave `1 / (1 - ratio)`.
#[must_use]
pub fn inverse_zoom_ratio(ratio: f64) -> f64 {
    -ratio / (1.0 - ratio)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoomConfig {
    pub zoom_in_ratio: f64,
    pub zoom_out_ratio: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_in_ratio: 0.5,
            zoom_out_ratio: -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_direction_uses_configured_ratios() {
        let config = ZoomConfig::default();
        let anchor = Point { x: 10, y: 20 };

        assert_eq!(
            ZoomEvent::from_direction(ZoomDirection::In, anchor, &config),
            ZoomEvent::new(0.5, anchor)
        );
        assert_eq!(
            ZoomEvent::from_direction(ZoomDirection::Out, anchor, &config),
            ZoomEvent::new(-1.0, anchor)
        );
    }

    #[test]
    fn test_default_zoom_out_undoes_default_zoom_in() {
        let config = ZoomConfig::default();
        assert_eq!(inverse_zoom_ratio(config.zoom_in_ratio), config.zoom_out_ratio);
    }

    #[test]
    fn test_inverse_keeps_anchor() {
        let event = ZoomEvent::new(0.2, Point { x: 3, y: 4 });
        let inverse = event.inverse();

        assert_eq!(inverse.anchor, event.anchor);
        assert!((inverse.ratio + 0.25).abs() < 1e-15);
    }
}
