//! Fixed-offset header parsing for the classic BMP layout.
//!
//! Every field is extracted with an explicit, bounds-checked little-endian
//! read at its named byte offset. Nothing here reinterprets raw memory as a
//! struct, and the magic tag is compared byte-wise in file order rather
//! than as a native-endian integer.

use crate::error::BmpTextError;
use crate::image::PixelOrder;

/// Size of the BMP file header in bytes.
pub const FILE_HEADER_LEN: usize = 14;
/// Size of the classic BITMAPINFOHEADER in bytes.
pub const INFO_HEADER_LEN: usize = 40;
/// Combined header size; the smallest buffer a decode will accept.
pub const HEADERS_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

// ── Cursor for reading from &[u8] ───────────────────────────────────

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn truncated(&self, needed: usize) -> BmpTextError {
        BmpTextError::TruncatedHeader {
            needed,
            actual: self.data.len(),
        }
    }

    fn read_u8(&mut self) -> Result<u8, BmpTextError> {
        if self.pos < self.data.len() {
            let b = self.data[self.pos];
            self.pos += 1;
            Ok(b)
        } else {
            Err(self.truncated(self.pos + 1))
        }
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpTextError> {
        if self.pos + 2 > self.data.len() {
            return Err(self.truncated(self.pos + 2));
        }
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpTextError> {
        if self.pos + 4 > self.data.len() {
            return Err(self.truncated(self.pos + 4));
        }
        let val = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(val)
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpTextError> {
        self.get_u32_le().map(|v| v as i32)
    }
}

// ── Compression enum ────────────────────────────────────────────────

/// BMP compression kinds. Only [`Compression::None`] is decodable here;
/// the rest exist so rejections can name what they saw.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Compression {
    None,
    Rle8,
    Rle4,
    BitFields,
    Unknown(u32),
}

impl Compression {
    fn from_u32(num: u32) -> Self {
        match num {
            0 => Self::None,
            1 => Self::Rle8,
            2 => Self::Rle4,
            3 => Self::BitFields,
            other => Self::Unknown(other),
        }
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The 14-byte BMP file header (minus the magic tag, which is validated
/// and discarded during parsing).
#[derive(Clone, Copy, Debug)]
pub struct BmpFileHeader {
    /// Total on-disk file size as recorded by the writer.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset from the start of the file to the pixel array.
    pub pixel_offset: u32,
}

impl BmpFileHeader {
    /// Parse the file header from the start of `data`.
    ///
    /// Callers guarantee `data.len() >= HEADERS_LEN`.
    pub(crate) fn parse(data: &[u8]) -> Result<Self, BmpTextError> {
        let mut cur = Cursor::new(data);
        // Tag bytes in file order: 'B' then 'M'. Reading them as a 16-bit
        // integer would swap them on little-endian hosts.
        if cur.read_u8()? != b'B' || cur.read_u8()? != b'M' {
            return Err(BmpTextError::NotABmpFile);
        }
        Ok(Self {
            file_size: cur.get_u32_le()?,
            reserved1: cur.get_u16_le()?,
            reserved2: cur.get_u16_le()?,
            pixel_offset: cur.get_u32_le()?,
        })
    }
}

// ── Info header ─────────────────────────────────────────────────────

/// The classic 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug)]
pub struct BmpInfoHeader {
    pub header_size: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Signed row count: negative means rows are stored top-down.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: Compression,
    /// Pixel data size field; writers of uncompressed files often leave it 0.
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BmpInfoHeader {
    /// Parse the info header at byte offset 14.
    ///
    /// Callers guarantee `data.len() >= HEADERS_LEN`.
    pub(crate) fn parse(data: &[u8]) -> Result<Self, BmpTextError> {
        let mut cur = Cursor::new(&data[FILE_HEADER_LEN..]);
        let header_size = cur.get_u32_le()?;
        if header_size > INFO_HEADER_LEN as u32 {
            // OS/2 v2, V4, V5: extended headers this decoder does not read.
            return Err(BmpTextError::UnsupportedHeaderVariant(header_size));
        }
        Ok(Self {
            header_size,
            width: cur.get_u32_le()?,
            height: cur.get_i32_le()?,
            planes: cur.get_u16_le()?,
            bits_per_pixel: cur.get_u16_le()?,
            compression: Compression::from_u32(cur.get_u32_le()?),
            image_size: cur.get_u32_le()?,
            x_pixels_per_meter: cur.get_u32_le()?,
            y_pixels_per_meter: cur.get_u32_le()?,
            colors_used: cur.get_u32_le()?,
            colors_important: cur.get_u32_le()?,
        })
    }

    /// Magnitude of the height field: the image's row count.
    pub fn row_count(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Row storage order, signalled by the sign of the height field.
    pub fn pixel_order(&self) -> PixelOrder {
        if self.height < 0 {
            PixelOrder::TopDown
        } else {
            PixelOrder::BottomUp
        }
    }
}
