pub mod sampler_backend;
