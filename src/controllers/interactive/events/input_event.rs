use crate::core::data::point::Point;
use crate::core::data::zoom_event::ZoomDirection;

/// User input an [`ExplorerSession`](crate::controllers::interactive::session::ExplorerSession)
/// understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Zoom {
        direction: ZoomDirection,
        anchor: Point,
    },
    ToggleStrategy,
    ResetView,
}
