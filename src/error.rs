use alloc::string::String;

use crate::bmp::Compression;

/// Errors from BMP decoding and text rendering.
///
/// All variants are terminal for the image being processed: decoding is
/// deterministic, so nothing is retried internally.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpTextError {
    /// The buffer does not start with the `'B'`, `'M'` tag bytes.
    #[error("not a BMP file: missing 'BM' tag")]
    NotABmpFile,

    #[error("truncated header: need {needed} bytes, got {actual}")]
    TruncatedHeader { needed: usize, actual: usize },

    /// Info header larger than the classic 40-byte BITMAPINFOHEADER
    /// (OS/2 or V4/V5 variants).
    #[error("unsupported info header variant: {0} bytes")]
    UnsupportedHeaderVariant(u32),

    #[error("unsupported bit depth: {0} (only 32-bit pixels)")]
    UnsupportedBitDepth(u16),

    #[error("unsupported compression: {0:?} (only uncompressed pixel data)")]
    UnsupportedCompression(Compression),

    #[error("truncated pixel data: need {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: u64, actual: u64 },

    /// Zero-width or zero-height image.
    #[error("image has no pixels")]
    EmptyImage,

    #[error("output buffer allocation failed")]
    OutOfMemory,

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}
