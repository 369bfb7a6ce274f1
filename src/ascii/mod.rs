//! ASCII renderer module for converting images to ASCII art.
//!
//! This module provides the complete pipeline for turning an image resource
//! into text suitable for terminal display:
//!
//! 1. **Acquisition** - Decode and resample to the output raster size, racing
//!    a fixed deadline ([`AsciiConverter`])
//! 2. **Luminance** - RGB to brightness using BT.601 weights
//! 3. **Character mapping** - Brightness to a 70-level density palette
//!
//! The raw image view uses [`to_half_blocks`] instead of character mapping.

mod grayscale;
mod halfblock;
mod loader;
mod palette;
mod raster;

pub use grayscale::{luminance, to_luminance, PixelGrid};
pub use halfblock::{to_half_blocks, CellColor, HalfBlockCell, HalfBlockImage, HALF_BLOCK};
pub use loader::{
    decode_bytes, decode_in_background, AsciiConverter, AsciiError, ImageDecoder,
    LocalImageDecoder, RemoteImageDecoder, DEFAULT_TIMEOUT, LOAD_FAILED_PLACEHOLDER,
    TIMEOUT_PLACEHOLDER,
};
pub use palette::{palette_char, palette_index, DENSEST, DENSITY_PALETTE, PALETTE_LEN, SPARSEST};
pub use raster::rasterize;
