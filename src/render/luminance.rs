//! Pixel-to-luminance models and luminance-to-glyph mapping.
//!
//! Per-pixel luminance uses integer fixed-point weights: integer division
//! is the exact truncation of the rational value, which keeps golden text
//! output reproducible across platforms and compilers.

use rgb::alt::BGRA8;

use super::palette::Palette;

/// How the three color channels collapse to one brightness scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Weighting {
    /// Perceptual Rec. 601 weights: 0.299 R, 0.587 G, 0.114 B.
    #[default]
    Weighted,
    /// Arithmetic mean of the three channels.
    Arithmetic,
    /// Mean of the smallest and largest channel.
    MinMax,
    /// ITU-R BT.709 weights: 0.2126 R, 0.7152 G, 0.0722 B.
    Luminosity,
}

impl Weighting {
    /// Luminance of one pixel, truncated. Always in `0..=255`.
    pub fn luminance(self, pixel: BGRA8) -> u8 {
        let b = u32::from(pixel.b);
        let g = u32::from(pixel.g);
        let r = u32::from(pixel.r);
        match self {
            Weighting::Weighted => ((b * 114 + g * 587 + r * 299) / 1000) as u8,
            Weighting::Arithmetic => ((b + g + r) / 3) as u8,
            Weighting::MinMax => {
                let lo = b.min(g).min(r);
                let hi = b.max(g).max(r);
                ((lo + hi) / 2) as u8
            }
            Weighting::Luminosity => ((b * 722 + g * 7152 + r * 2126) / 10_000) as u8,
        }
    }

    /// The same weighting applied to block-averaged channels, truncated
    /// like the per-pixel path. Inputs must be in `0.0..=255.0`.
    pub fn block_luminance(self, avg_b: f64, avg_g: f64, avg_r: f64) -> u8 {
        let value = match self {
            Weighting::Weighted => (avg_b * 114.0 + avg_g * 587.0 + avg_r * 299.0) / 1000.0,
            Weighting::Arithmetic => (avg_b + avg_g + avg_r) / 3.0,
            Weighting::MinMax => {
                let lo = avg_b.min(avg_g).min(avg_r);
                let hi = avg_b.max(avg_g).max(avg_r);
                (lo + hi) / 2.0
            }
            Weighting::Luminosity => (avg_b * 722.0 + avg_g * 7152.0 + avg_r * 2126.0) / 10_000.0,
        };
        value as u8
    }
}

/// Map a luminance value onto a palette glyph.
///
/// Zero is pinned to the emptiest glyph. Any nonzero luminance maps to
/// `ceil(luminance / 255 * len)`, which is at least 1; plain truncation
/// would floor small nonzero values to position 0 and underflow the
/// `position - 1` index below.
pub fn to_glyph(luminance: u8, palette: Palette) -> char {
    if luminance == 0 {
        return palette.glyph(0);
    }
    let position = (luminance as usize * palette.len()).div_ceil(255);
    palette.glyph(position - 1)
}
