//! Luminance to character rasterization.

use super::grayscale::{luminance, PixelGrid};
use super::palette::palette_char;

/// Rasterize a pixel grid into ASCII art.
///
/// Each sample maps to one palette character by luminance (dense for dark,
/// sparse for bright). The first `width * height` samples are emitted in
/// row-major order and a `'\n'` is appended every time the running column
/// count reaches `width`, including after the last row.
///
/// # Arguments
/// * `grid` - Samples already resampled to the output raster size
/// * `width` - Characters per line
/// * `height` - Number of lines
///
/// # Example
/// ```ignore
/// let grid = PixelGrid::filled(3, 2, [0, 0, 0]);
/// assert_eq!(rasterize(&grid, 3, 2), "$$$\n$$$\n");
/// ```
pub fn rasterize(grid: &PixelGrid, width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        return String::new();
    }

    let cells = (width as usize) * (height as usize);
    let mut ascii = String::with_capacity(cells + height as usize);
    let mut column = 0u32;

    for [r, g, b] in grid.samples().take(cells) {
        ascii.push(palette_char(luminance(r, g, b)));

        column += 1;
        if column >= width {
            ascii.push('\n');
            column = 0;
        }
    }

    ascii
}
