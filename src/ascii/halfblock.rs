//! True-color half-block rendering for the raw image view.
//!
//! Each terminal cell shows two vertically stacked samples using the upper
//! half block character: the foreground paints the top sample and the
//! background paints the bottom one.

use super::grayscale::PixelGrid;

/// Upper half block (U+2580).
pub const HALF_BLOCK: char = '\u{2580}';

/// RGB color for a half-block cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<[u8; 3]> for CellColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
}

/// One terminal cell of a half-block image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfBlockCell {
    pub top: CellColor,
    pub bottom: CellColor,
}

/// A raw image prepared for terminal display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HalfBlockImage {
    /// Width in cells
    pub width: u16,
    /// Height in cells (half the sample rows, rounded up)
    pub height: u16,
    /// Cells in row-major order
    pub cells: Vec<HalfBlockCell>,
}

impl HalfBlockImage {
    /// Iterate over rows of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[HalfBlockCell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

/// Pair up sample rows of `grid` into half-block cells.
///
/// A grid with an odd number of rows gets a black bottom half on its last
/// cell row.
pub fn to_half_blocks(grid: &PixelGrid) -> HalfBlockImage {
    let width = grid.width();
    let height = grid.height().div_ceil(2);
    let mut cells = Vec::with_capacity((width as usize) * (height as usize));

    for row in 0..height {
        for x in 0..width {
            let top = grid.pixel(x, row * 2).unwrap_or_default();
            let bottom = grid.pixel(x, row * 2 + 1).unwrap_or_default();
            cells.push(HalfBlockCell {
                top: top.into(),
                bottom: bottom.into(),
            });
        }
    }

    HalfBlockImage {
        width: width.min(u16::MAX as u32) as u16,
        height: height.min(u16::MAX as u32) as u16,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_blocks_pairs_rows() {
        let grid = PixelGrid::new(
            1,
            2,
            vec![
                10, 20, 30, // top
                40, 50, 60, // bottom
            ],
        )
        .unwrap();
        let image = to_half_blocks(&grid);
        assert_eq!(image.width, 1);
        assert_eq!(image.height, 1);
        assert_eq!(image.cells[0].top, CellColor { r: 10, g: 20, b: 30 });
        assert_eq!(image.cells[0].bottom, CellColor { r: 40, g: 50, b: 60 });
    }

    #[test]
    fn test_half_blocks_odd_rows() {
        let grid = PixelGrid::filled(2, 3, [255, 255, 255]);
        let image = to_half_blocks(&grid);
        assert_eq!(image.height, 2);
        assert_eq!(image.cells.len(), 4);
        // Last row has no bottom sample.
        assert_eq!(image.cells[3].bottom, CellColor::default());
        assert_eq!(image.rows().count(), 2);
    }
}
