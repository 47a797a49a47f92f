mod controllers;
mod core;
mod logging;
mod presenters;

pub use controllers::cli::render_config::{BenchmarkConfig, RenderConfig, RenderConfigError};
pub use controllers::cli::render_controller::CliRenderController;
pub use controllers::cli::zoom_benchmark::{BenchmarkReport, ZoomBenchmark, ZoomBenchmarkError};
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::errors::render_error::RenderError;
pub use controllers::interactive::{
    ExplorerSession, InputEvent, InteractiveController, PresenterPort, RenderEvent,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use core::actions::generate_fractal::sampler_strategy::SamplerStrategy;
pub use core::actions::sample_plane::cpu_sampler::CpuSampler;
pub use core::actions::sample_plane::ports::sampler_backend::SamplerBackend;
pub use core::actions::sample_plane::sample_plane::SamplePlaneError;
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::parameter_window::{Axis, ParameterWindow, ParameterWindowError, WindowBounds};
pub use core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use core::data::point::Point;
pub use core::data::render_request::{BuildRequestError, RenderRequest};
pub use core::data::viewport::{Viewport, ViewportError};
pub use core::data::zoom_event::{ZoomConfig, ZoomDirection, ZoomEvent, inverse_zoom_ratio};
pub use core::fractals::fractal_kinds::FractalKinds;
pub use core::fractals::fractal_settings::FractalSettings;
pub use core::fractals::lyapunov::kernel::{LyapunovResult, lyapunov_exponent};
pub use core::fractals::lyapunov::lyapunov_config::LyapunovConfig;
pub use core::fractals::lyapunov::params::LyapunovParams;
pub use core::fractals::lyapunov::sequence::{
    LyapunovSequence, LyapunovSequenceError, LyapunovSymbol,
};
pub use core::fractals::newton::kernel::{NewtonResult, newton};
pub use core::fractals::newton::newton_config::NewtonConfig;
pub use core::fractals::newton::params::NewtonParams;
pub use core::fractals::newton::root_function::RootFunction;
pub use logging::{LoggingError, init_logging};
pub use presenters::file::ppm::PpmFilePresenter;
