pub mod fractal_kinds;
pub mod fractal_settings;
pub mod lyapunov;
pub mod newton;
