//! Pixel grids and RGB to luminance conversion using ITU-R BT.601 weights.

use super::AsciiError;

/// An RGB sample grid, already resampled to the output raster size.
///
/// Samples are stored row-major, 3 bytes per sample (R, G, B).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid from raw RGB data.
    ///
    /// # Errors
    /// Returns [`AsciiError::GridShape`] if `data` is not exactly
    /// `width * height * 3` bytes long.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, AsciiError> {
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(AsciiError::GridShape {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a grid where every sample has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(count * 3);
        for _ in 0..count {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Iterate over samples in row-major order.
    pub fn samples(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|rgb| [rgb[0], rgb[1], rgb[2]])
    }
}

/// Normalized luminance of an RGB sample.
///
/// `L = (0.299*R + 0.587*G + 0.114*B) / 255`, in `[0, 1]`.
///
/// Computed in `f64` with the weights applied in this exact order so that
/// pure white lands on exactly `1.0`.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 * 0.299 + g as f64 * 0.587 + b as f64 * 0.114) / 255.0
}

/// Convert a pixel grid to normalized luminance values, one per sample.
pub fn to_luminance(grid: &PixelGrid) -> Vec<f64> {
    grid.samples().map(|[r, g, b]| luminance(r, g, b)).collect()
}
