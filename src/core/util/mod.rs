pub mod calculate_bands_in_viewport;
pub mod calculate_threads_for_viewport_banding;
pub mod pixel_to_plane_coords;
