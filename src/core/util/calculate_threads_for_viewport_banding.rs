use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_bands_in_viewport::calculate_bands_in_viewport;
use std::num::NonZeroU32;

pub fn calculate_threads_for_viewport_banding(viewport: Viewport) -> u32 {
    let num_avail_threads = std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(u32::try_from(n.get()).unwrap_or(u32::MAX)))
        .unwrap_or(NonZeroU32::MIN);

    calculate_bands_in_viewport(num_avail_threads, viewport)
}
