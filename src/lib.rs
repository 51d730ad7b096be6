//! # bmptext
//!
//! Uncompressed 32-bit Windows BMP decoder and terminal text renderer.
//!
//! ## Zero-Copy Decoding
//!
//! Decoding never copies pixel data. [`DecodedImage`] holds the parsed
//! headers plus a borrowed `&[BGRA8]` view directly into the input buffer,
//! so the input bytes must outlive the image.
//!
//! ## Rendering
//!
//! Rendering maps each pixel (or each averaged pixel block, when the image
//! is wider than the target text width) to a glyph from a density-ordered
//! [`Palette`]. Images at most `target_width` pixels wide render 1:1; wider
//! images are downscaled by averaging square pixel blocks, which preserves
//! the aspect ratio because the same block side length applies to both axes.
//!
//! ## Supported Input
//!
//! The classic BMP layout only: 14-byte file header, 40-byte info header,
//! 32 bits per pixel, no compression. Both bottom-up (positive height) and
//! top-down (negative height) row orders are handled; the rendered text
//! always reads top to bottom.
//!
//! ## Non-Goals
//!
//! - RLE4/RLE8/BITFIELDS compression, palette-indexed or 24-bit pixels
//! - OS/2 and V4/V5 header variants
//! - Encoding (this crate never writes BMP files)
//!
//! ## Usage
//!
//! ```no_run
//! use bmptext::{DecodeRequest, Palette, RenderRequest};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let image = DecodeRequest::new(data).decode()?;
//! let text = RenderRequest::new(&image)
//!     .with_palette(Palette::EXTENDED)
//!     .render()?;
//! print!("{text}");
//! # Ok::<(), bmptext::BmpTextError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod limits;

pub mod bmp;
pub mod render;

// Re-exports
pub use bmp::{BmpFileHeader, BmpInfoHeader, Compression, DecodeRequest, decode};
pub use error::BmpTextError;
pub use image::{DecodedImage, PixelOrder};
pub use limits::Limits;
pub use render::palette::Palette;
pub use render::{
    DEFAULT_TARGET_WIDTH, RenderRequest, RenderedText, Strategy, Weighting, render_bmp, to_glyph,
};
