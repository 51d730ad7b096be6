//! Decode entry point: header validation plus pixel-view construction.

use rgb::AsPixels as _;
use rgb::alt::BGRA8;

use super::header::{BmpFileHeader, BmpInfoHeader, Compression, HEADERS_LEN};
use crate::error::BmpTextError;
use crate::image::DecodedImage;
use crate::limits::Limits;

/// Builder for a decode operation.
///
/// ```no_run
/// use bmptext::{DecodeRequest, Limits};
///
/// let data: &[u8] = &[];
/// let limits = Limits { max_pixels: Some(64_000_000), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode()?;
/// # Ok::<(), bmptext::BmpTextError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits to this decode.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse the headers and build a borrowed view over the pixel records.
    ///
    /// Pure parse: no allocation, no I/O. The returned image borrows `data`
    /// for its whole lifetime.
    pub fn decode(self) -> Result<DecodedImage<'a>, BmpTextError> {
        let data = self.data;
        if data.len() < HEADERS_LEN {
            return Err(BmpTextError::TruncatedHeader {
                needed: HEADERS_LEN,
                actual: data.len(),
            });
        }

        let file_header = BmpFileHeader::parse(data)?;
        let info_header = BmpInfoHeader::parse(data)?;

        if info_header.width == 0 || info_header.height == 0 {
            return Err(BmpTextError::EmptyImage);
        }
        if info_header.bits_per_pixel != 32 {
            return Err(BmpTextError::UnsupportedBitDepth(info_header.bits_per_pixel));
        }
        if info_header.compression != Compression::None {
            return Err(BmpTextError::UnsupportedCompression(info_header.compression));
        }

        let width = info_header.width;
        let height = info_header.row_count();
        if let Some(limits) = self.limits {
            limits.check(width, height)?;
        }

        // 32-bit rows need no stride padding, so the pixel region is exactly
        // width * height records of 4 bytes each.
        let pixel_count = u64::from(width) * u64::from(height);
        let needed = u64::from(file_header.pixel_offset) + pixel_count * 4;
        if needed > data.len() as u64 {
            return Err(BmpTextError::TruncatedPixelData {
                needed,
                actual: data.len() as u64,
            });
        }

        let start = file_header.pixel_offset as usize;
        let end = needed as usize;
        let pixels: &[BGRA8] = data[start..end].as_pixels();

        Ok(DecodedImage::new(file_header, info_header, pixels))
    }
}
