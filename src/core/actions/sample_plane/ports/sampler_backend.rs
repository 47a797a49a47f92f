use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::sample_plane::sample_plane::SamplePlaneError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;

/// Anything that can turn a [`RenderRequest`] into a fully populated
/// [`PixelBuffer`]. Backends must agree pixel for pixel on the same request.
pub trait SamplerBackend: Send + Sync {
    fn sample(
        &self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, SamplePlaneError>;

    fn display_name(&self) -> &str;
}
