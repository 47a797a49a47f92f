pub mod render_config;
pub mod render_controller;
pub mod zoom_benchmark;
