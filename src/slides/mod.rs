/// Carousel slide images
///
/// This module handles:
/// - Downloading the slide images in the background
/// - Decoding and downscaling them for display

pub mod loader;

pub use loader::{fetch_slide, http_client, DecodedSlide, SlideError};
