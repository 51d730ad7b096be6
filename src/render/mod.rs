//! Pixel-to-text rendering: strategy dispatch, output sizing, assembly.

mod direct;
mod downscaled;

pub mod luminance;
pub mod palette;

pub use luminance::{Weighting, to_glyph};
pub use palette::Palette;

use core::fmt;
use core::num::NonZeroU32;

use alloc::string::String;

use crate::error::BmpTextError;
use crate::image::DecodedImage;

/// Conventional full-screen terminal width, the default render target.
pub const DEFAULT_TARGET_WIDTH: NonZeroU32 = match NonZeroU32::new(140) {
    Some(w) => w,
    None => unreachable!(),
};

// ── Strategy selection ──────────────────────────────────────────────

/// Which traversal a render uses. Selected once per call from the image
/// width and the target text width; there are no transitions mid-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One glyph per pixel.
    Direct,
    /// One glyph per `block_dim` x `block_dim` averaged pixel block. The
    /// same side length applies to both axes, so downscaling preserves the
    /// image's aspect ratio.
    Downscaled { block_dim: u32 },
}

impl Strategy {
    /// Pure dispatch on image width vs. target text width.
    pub fn select(width: u32, target_width: NonZeroU32) -> Strategy {
        if width <= target_width.get() {
            Strategy::Direct
        } else {
            Strategy::Downscaled {
                block_dim: width.div_ceil(target_width.get()),
            }
        }
    }
}

/// Line and column counts of the text a render will produce, computed
/// before the output buffer is allocated.
pub fn text_dimensions(width: u32, height: u32, strategy: Strategy) -> (usize, usize) {
    match strategy {
        Strategy::Direct => (height as usize, width as usize),
        Strategy::Downscaled { block_dim } => (
            height.div_ceil(block_dim) as usize,
            width.div_ceil(block_dim) as usize,
        ),
    }
}

/// Allocate the output buffer up front so a failed allocation surfaces as
/// an error instead of partial output.
fn alloc_text_buffer(lines: usize, columns: usize) -> Result<String, BmpTextError> {
    let chars = columns
        .checked_add(1) // the line break
        .and_then(|per_line| per_line.checked_mul(lines))
        .ok_or(BmpTextError::OutOfMemory)?;
    let mut buf = String::new();
    buf.try_reserve_exact(chars)
        .map_err(|_| BmpTextError::OutOfMemory)?;
    Ok(buf)
}

// ── Rendered output ─────────────────────────────────────────────────

/// Line-structured text produced by a render.
///
/// Every line, including the last, is exactly `line_width()` glyphs
/// followed by a single `'\n'`; there is no extra terminator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedText {
    text: String,
    lines: usize,
    columns: usize,
}

impl RenderedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Glyphs per line, excluding the line break.
    pub fn line_width(&self) -> usize {
        self.columns
    }

    /// The lines, without their breaks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl fmt::Display for RenderedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ── Render request ──────────────────────────────────────────────────

/// Builder for a render operation over a decoded image.
///
/// ```no_run
/// use bmptext::{DecodeRequest, Palette, RenderRequest, Weighting};
/// use core::num::NonZeroU32;
///
/// let data: &[u8] = &[];
/// let image = DecodeRequest::new(data).decode()?;
/// let text = RenderRequest::new(&image)
///     .with_palette(Palette::MINIMAL)
///     .with_target_width(NonZeroU32::new(80).unwrap())
///     .with_weighting(Weighting::Luminosity)
///     .render()?;
/// # Ok::<(), bmptext::BmpTextError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest<'a> {
    image: DecodedImage<'a>,
    palette: Palette,
    target_width: NonZeroU32,
    weighting: Weighting,
}

impl<'a> RenderRequest<'a> {
    pub fn new(image: &DecodedImage<'a>) -> Self {
        Self {
            image: *image,
            palette: Palette::default(),
            target_width: DEFAULT_TARGET_WIDTH,
            weighting: Weighting::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Widest line the output may have, in glyphs.
    pub fn with_target_width(mut self, target_width: NonZeroU32) -> Self {
        self.target_width = target_width;
        self
    }

    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Render the image to line-structured text.
    pub fn render(&self) -> Result<RenderedText, BmpTextError> {
        let image = &self.image;
        if image.width() == 0 || image.height() == 0 {
            return Err(BmpTextError::EmptyImage);
        }
        match Strategy::select(image.width(), self.target_width) {
            Strategy::Direct => direct::render(image, self.palette, self.weighting),
            Strategy::Downscaled { block_dim } => {
                downscaled::render(image, self.palette, self.weighting, block_dim)
            }
        }
    }
}

/// Decode BMP data and render it with default settings.
pub fn render_bmp(data: &[u8]) -> Result<RenderedText, BmpTextError> {
    let image = crate::bmp::decode(data)?;
    RenderRequest::new(&image).render()
}
