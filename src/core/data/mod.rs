pub mod colour;
pub mod complex;
pub mod parameter_window;
pub mod pixel_buffer;
pub mod point;
pub mod render_request;
pub mod viewport;
pub mod zoom_event;
