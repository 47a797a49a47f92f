pub mod errors;
pub mod generate_fractal;
pub mod generate_fractal_parallel_rayon;
pub mod generate_fractal_parallel_scoped_threads;
pub mod generate_fractal_serial;
pub mod ports;
pub mod sampler_strategy;

#[cfg(test)]
pub(crate) mod test_support;
