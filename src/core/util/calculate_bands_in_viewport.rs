use crate::core::data::viewport::Viewport;
use std::num::NonZeroU32;

/// Number of horizontal bands to split `viewport` into: never more than
/// `max_bands`, never more than one band per row.
pub fn calculate_bands_in_viewport(max_bands: NonZeroU32, viewport: Viewport) -> u32 {
    max_bands.get().min(viewport.height())
}
