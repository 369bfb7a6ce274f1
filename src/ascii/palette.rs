//! Density palette used for luminance to character mapping.

/// 70-level density ramp.
/// Characters ordered from densest (`$`, black) to sparsest (space, white).
pub const DENSITY_PALETTE: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Number of characters in [`DENSITY_PALETTE`].
pub const PALETTE_LEN: usize = 70;

/// Densest character (used for black samples).
pub const DENSEST: char = '$';

/// Sparsest character (used for white samples).
pub const SPARSEST: char = ' ';

/// Palette index for a luminance value in `[0, 1]`.
///
/// `index = floor(L * (PALETTE_LEN - 1))`, clamped to the palette bounds.
/// Out-of-range and NaN luminance values clamp instead of panicking.
pub fn palette_index(luminance: f64) -> usize {
    let scaled = (luminance * (PALETTE_LEN - 1) as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else if scaled >= (PALETTE_LEN - 1) as f64 {
        PALETTE_LEN - 1
    } else {
        scaled as usize
    }
}

/// Palette character for a luminance value in `[0, 1]`.
#[inline]
pub fn palette_char(luminance: f64) -> char {
    // The palette is pure ASCII, so byte indexing is char indexing.
    DENSITY_PALETTE.as_bytes()[palette_index(luminance)] as char
}
