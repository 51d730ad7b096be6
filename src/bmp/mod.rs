//! Decoder for the classic uncompressed 32-bit Windows BMP layout.

mod decode;
mod header;

pub use decode::DecodeRequest;
pub use header::{BmpFileHeader, BmpInfoHeader, Compression, HEADERS_LEN};

use crate::error::BmpTextError;
use crate::image::DecodedImage;

/// Decode BMP data with default settings (no limits).
pub fn decode(data: &[u8]) -> Result<DecodedImage<'_>, BmpTextError> {
    DecodeRequest::new(data).decode()
}
