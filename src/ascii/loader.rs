//! Pixel grid acquisition with a bounded timeout.
//!
//! Decoding is an injected capability ([`ImageDecoder`]). The converter races
//! the decode against a deadline and always resolves to a string: ASCII art
//! on success, or one of two fixed placeholders on failure or timeout.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use image::imageops::FilterType;

use super::grayscale::PixelGrid;
use super::halfblock::{to_half_blocks, HalfBlockImage};
use super::raster::rasterize;
use crate::client::{ClientError, PortfolioClient};

/// Default deadline for acquiring a pixel grid.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Placeholder for decode failures and processing errors.
pub const LOAD_FAILED_PLACEHOLDER: &str = "[Image could not be loaded]";

/// Placeholder for decodes that did not finish before the deadline.
pub const TIMEOUT_PLACEHOLDER: &str = "[Image loading timeout]";

/// Errors that can occur while acquiring or converting an image.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("pixel grid {width}x{height} does not match a buffer of {len} bytes")]
    GridShape { width: u32, height: u32, len: usize },

    #[error("failed to fetch image: {0}")]
    Fetch(#[from] ClientError),

    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image processing failed: {0}")]
    Processing(String),

    #[error("image loading timed out after {0:?}")]
    Timeout(Duration),
}

impl AsciiError {
    /// The fixed user-facing placeholder for this error.
    pub fn placeholder(&self) -> &'static str {
        match self {
            AsciiError::Timeout(_) => TIMEOUT_PLACEHOLDER,
            _ => LOAD_FAILED_PLACEHOLDER,
        }
    }
}

/// Capability to turn a resource identifier into a resampled pixel grid.
///
/// Implementations must return a grid of exactly `width x height` samples.
pub trait ImageDecoder {
    fn decode(
        &self,
        resource: &str,
        width: u32,
        height: u32,
    ) -> impl Future<Output = Result<PixelGrid, AsciiError>> + Send;
}

/// Decode encoded image bytes and stretch them to `width x height` samples.
pub fn decode_bytes(bytes: &[u8], width: u32, height: u32) -> Result<PixelGrid, AsciiError> {
    if width == 0 || height == 0 {
        return Err(AsciiError::Processing(format!(
            "invalid target size {}x{}",
            width, height
        )));
    }

    let img = image::load_from_memory(bytes)?;
    let rgba = img.resize_exact(width, height, FilterType::Triangle).to_rgba8();
    let data = rgba.pixels().flat_map(|p| opaque_rgb(p.0)).collect();
    PixelGrid::new(width, height, data)
}

/// Fully transparent samples read back as black.
fn opaque_rgb([r, g, b, a]: [u8; 4]) -> [u8; 3] {
    if a == 0 {
        [0, 0, 0]
    } else {
        [r, g, b]
    }
}

/// Run [`decode_bytes`] on the blocking pool.
///
/// A panic inside the decoder is reported as a processing error.
pub async fn decode_in_background(
    bytes: Vec<u8>,
    width: u32,
    height: u32,
) -> Result<PixelGrid, AsciiError> {
    tokio::task::spawn_blocking(move || decode_bytes(&bytes, width, height))
        .await
        .map_err(|e| AsciiError::Processing(e.to_string()))?
}

/// Decoder that fetches image bytes from the portfolio server.
#[derive(Debug, Clone)]
pub struct RemoteImageDecoder {
    client: PortfolioClient,
}

impl RemoteImageDecoder {
    pub fn new(client: PortfolioClient) -> Self {
        Self { client }
    }
}

impl ImageDecoder for RemoteImageDecoder {
    fn decode(
        &self,
        resource: &str,
        width: u32,
        height: u32,
    ) -> impl Future<Output = Result<PixelGrid, AsciiError>> + Send {
        let client = self.client.clone();
        let resource = resource.to_string();
        async move {
            let bytes = client.fetch_resource(&resource).await?;
            decode_in_background(bytes, width, height).await
        }
    }
}

/// Decoder that reads image files from the local disk.
///
/// Resources are interpreted as paths relative to `base`.
#[derive(Debug, Clone, Default)]
pub struct LocalImageDecoder {
    base: PathBuf,
}

impl LocalImageDecoder {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ImageDecoder for LocalImageDecoder {
    fn decode(
        &self,
        resource: &str,
        width: u32,
        height: u32,
    ) -> impl Future<Output = Result<PixelGrid, AsciiError>> + Send {
        let path = self.base.join(resource);
        async move {
            let bytes = tokio::fs::read(&path).await?;
            decode_in_background(bytes, width, height).await
        }
    }
}

/// Converts images to ASCII art, racing acquisition against a deadline.
#[derive(Debug, Clone, Copy)]
pub struct AsciiConverter {
    timeout: Duration,
}

impl Default for AsciiConverter {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl AsciiConverter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Acquire a `width x height` grid, or fail once the deadline passes.
    ///
    /// Whichever of success, decode error or deadline comes first decides the
    /// result; the decode future is dropped on timeout.
    pub async fn acquire<D: ImageDecoder>(
        &self,
        decoder: &D,
        resource: &str,
        width: u32,
        height: u32,
    ) -> Result<PixelGrid, AsciiError> {
        let grid = match tokio::time::timeout(self.timeout, decoder.decode(resource, width, height))
            .await
        {
            Ok(result) => result?,
            Err(_) => return Err(AsciiError::Timeout(self.timeout)),
        };

        if grid.width() != width || grid.height() != height {
            return Err(AsciiError::Processing(format!(
                "decoder returned {}x{} grid, expected {}x{}",
                grid.width(),
                grid.height(),
                width,
                height
            )));
        }
        Ok(grid)
    }

    /// Convert `resource` to ASCII art of `width x height` characters.
    ///
    /// Never fails: errors resolve to [`LOAD_FAILED_PLACEHOLDER`] and the
    /// deadline resolves to [`TIMEOUT_PLACEHOLDER`].
    pub async fn convert<D: ImageDecoder>(
        &self,
        decoder: &D,
        resource: &str,
        width: u32,
        height: u32,
    ) -> String {
        match self.acquire(decoder, resource, width, height).await {
            Ok(grid) => rasterize(&grid, width, height),
            Err(e) => {
                log::warn!("ASCII conversion of {} failed: {}", resource, e);
                e.placeholder().to_string()
            }
        }
    }

    /// Prepare `resource` for the raw (true-color) view.
    ///
    /// Samples two rows per terminal line. On failure the error carries the
    /// same placeholder text as [`AsciiConverter::convert`].
    pub async fn convert_raw<D: ImageDecoder>(
        &self,
        decoder: &D,
        resource: &str,
        width: u32,
        height: u32,
    ) -> Result<HalfBlockImage, &'static str> {
        match self
            .acquire(decoder, resource, width, height.saturating_mul(2))
            .await
        {
            Ok(grid) => Ok(to_half_blocks(&grid)),
            Err(e) => {
                log::warn!("Raw image view of {} failed: {}", resource, e);
                Err(e.placeholder())
            }
        }
    }
}
