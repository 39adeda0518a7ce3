/// Slide image loader
///
/// Downloads a carousel image, then decodes and downscales it off the UI
/// thread. Failures are reported as `SlideError` and the slide falls back
/// to its alt text.

use image::imageops::FilterType;
use thiserror::Error;
use tokio::task;

/// Slides are drawn 400px tall; keep enough pixels for a HiDPI display
pub const MAX_SLIDE_WIDTH: u32 = 1200;
pub const MAX_SLIDE_HEIGHT: u32 = 800;

/// Wikimedia rejects requests without a descriptive user agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Errors are stringly-held so they can travel inside `Message`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlideError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("server answered {0}")]
    Status(u16),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("task join error: {0}")]
    Join(String),
}

/// RGBA pixels ready to hand to the renderer
#[derive(Clone)]
pub struct DecodedSlide {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for DecodedSlide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedSlide")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Build the HTTP client shared by all slide downloads
pub fn http_client() -> Result<reqwest::Client, SlideError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| SlideError::Http(e.to_string()))
}

/// Download and decode one slide
pub async fn fetch_slide(
    client: reqwest::Client,
    url: &'static str,
) -> Result<DecodedSlide, SlideError> {
    let bytes = download(&client, url).await?;
    tracing::debug!(url, size = bytes.len(), "Slide downloaded");

    // Decoding a 1200px JPEG is CPU-bound, keep it off the executor
    task::spawn_blocking(move || decode_slide(&bytes))
        .await
        .map_err(|e| SlideError::Join(e.to_string()))?
}

async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, SlideError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SlideError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SlideError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| SlideError::Http(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// Decode image bytes, shrinking anything larger than the slide bounds
pub fn decode_slide(bytes: &[u8]) -> Result<DecodedSlide, SlideError> {
    let mut img = image::load_from_memory(bytes).map_err(|e| SlideError::Decode(e.to_string()))?;

    if img.width() > MAX_SLIDE_WIDTH || img.height() > MAX_SLIDE_HEIGHT {
        img = img.resize(MAX_SLIDE_WIDTH, MAX_SLIDE_HEIGHT, FilterType::Lanczos3);
    }

    let rgba = img.to_rgba8();
    Ok(DecodedSlide {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
