use std::path::Path;
use std::time::{Duration, Instant};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::sample_plane::ports::sampler_backend::SamplerBackend;
use crate::core::actions::sample_plane::sample_plane::SamplePlaneError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;

/// Renders one request to completion and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort, B: SamplerBackend> {
    presenter: P,
    backend: B,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort, B: SamplerBackend> CliRenderController<P, B> {
    pub fn new(presenter: P, backend: B) -> Self {
        Self {
            presenter,
            backend,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self, request: &RenderRequest) -> Result<Duration, SamplePlaneError> {
        let viewport = request.viewport();
        let bounds = request.window.bounds();

        log::info!(
            "rendering {} at {}x{} over [{}, {}] x [{}, {}]",
            request.settings.kind(),
            viewport.width(),
            viewport.height(),
            bounds.x_min,
            bounds.x_max,
            bounds.y_min,
            bounds.y_max
        );

        let start = Instant::now();
        let buffer = self.backend.sample(request, &NeverCancel)?;
        let duration = start.elapsed();

        log::info!(
            "{} sampler ({}) took {:.2?}",
            self.backend.display_name(),
            request.strategy,
            duration
        );

        self.buffer = Some(buffer);

        Ok(duration)
    }

    /// Writes the last generated frame, creating parent directories as
    /// needed. Does nothing before the first `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(buffer) = &self.buffer {
            if let Some(parent) = filepath.parent() {
                std::fs::create_dir_all(parent)?;
            }

            self.presenter.present(buffer, filepath)?;
            log::info!("saved to {}", filepath.display());
        }

        Ok(())
    }
}
