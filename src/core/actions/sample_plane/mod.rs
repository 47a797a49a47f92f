pub mod cpu_sampler;
pub mod ports;
pub mod sample_plane;
