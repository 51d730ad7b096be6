//! Downscaled strategy: one glyph per averaged pixel block.

use super::luminance::to_glyph;
use super::palette::Palette;
use super::{RenderedText, Strategy, Weighting, alloc_text_buffer, text_dimensions};
use crate::error::BmpTextError;
use crate::image::DecodedImage;

/// Partition the image into `block_dim` x `block_dim` blocks, average each
/// block's channels, and emit one glyph per block.
///
/// Blocks in the rightmost column and bottommost row may be smaller than
/// `block_dim` on a side. Their averages divide by the block's actual pixel
/// count; dividing by the nominal `block_dim^2` would skew every edge and
/// corner block toward black.
pub(super) fn render(
    image: &DecodedImage<'_>,
    palette: Palette,
    weighting: Weighting,
    block_dim: u32,
) -> Result<RenderedText, BmpTextError> {
    let (lines, columns) =
        text_dimensions(image.width(), image.height(), Strategy::Downscaled { block_dim });
    let mut text = alloc_text_buffer(lines, columns)?;

    for block_y in 0..lines as u32 {
        let y0 = block_y * block_dim;
        let y1 = y0.saturating_add(block_dim).min(image.height());
        for block_x in 0..columns as u32 {
            let x0 = block_x * block_dim;
            let x1 = x0.saturating_add(block_dim).min(image.width());

            let mut sum_b = 0.0f64;
            let mut sum_g = 0.0f64;
            let mut sum_r = 0.0f64;
            for y in y0..y1 {
                for x in x0..x1 {
                    let pixel = image.pixel(x, y);
                    sum_b += f64::from(pixel.b);
                    sum_g += f64::from(pixel.g);
                    sum_r += f64::from(pixel.r);
                }
            }

            // True pixel count of this block; only the last column/row of
            // blocks can fall short of block_dim^2.
            let count = (u64::from(x1 - x0) * u64::from(y1 - y0)) as f64;
            let luminance =
                weighting.block_luminance(sum_b / count, sum_g / count, sum_r / count);
            text.push(to_glyph(luminance, palette));
        }
        text.push('\n');
    }

    Ok(RenderedText {
        text,
        lines,
        columns,
    })
}
