//! Interactive exploration: an [`ExplorerSession`] turns input into render
//! requests and an [`InteractiveController`] renders the latest one on a
//! background worker, handing finished frames to a [`PresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod session;

pub use controller::InteractiveController;
pub use events::input_event::InputEvent;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::PresenterPort;
pub use session::ExplorerSession;
