pub mod algorithm;
pub mod colour_map;
pub mod errors;
pub mod kernel;
pub mod newton_config;
pub mod params;
pub mod root_function;
