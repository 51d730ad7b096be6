//! Direct strategy: one glyph per pixel.

use super::luminance::to_glyph;
use super::palette::Palette;
use super::{RenderedText, Strategy, Weighting, alloc_text_buffer, text_dimensions};
use crate::error::BmpTextError;
use crate::image::DecodedImage;

/// Emit `height` lines of `width` glyphs each, reading rows in visual
/// order (top of the image first) whatever the storage order is.
pub(super) fn render(
    image: &DecodedImage<'_>,
    palette: Palette,
    weighting: Weighting,
) -> Result<RenderedText, BmpTextError> {
    let (lines, columns) = text_dimensions(image.width(), image.height(), Strategy::Direct);
    let mut text = alloc_text_buffer(lines, columns)?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let luminance = weighting.luminance(image.pixel(x, y));
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
