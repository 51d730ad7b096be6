//! Decoder tests: header extraction, rejection of unsupported variants,
//! and the borrowed pixel view.

use bmptext::*;

/// Build an uncompressed 32-bit BMP. `height` keeps its sign (negative
/// means top-down rows); `quads` are (B, G, R, reserved) records in
/// storage order.
fn bmp32(width: u32, height: i32, quads: &[[u8; 4]]) -> Vec<u8> {
    let pixel_bytes = quads.len() as u32 * 4;
    let mut out = Vec::new();
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(54 + pixel_bytes).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&32u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression: none
    out.extend_from_slice(&pixel_bytes.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    for quad in quads {
        out.extend_from_slice(quad);
    }
    out
}

const BLACK: [u8; 4] = [0, 0, 0, 255];

// ── Rejection ───────────────────────────────────────────────────────

#[test]
fn empty_buffer_rejected() {
    match decode(&[]) {
        Err(BmpTextError::TruncatedHeader { needed: 54, actual: 0 }) => {}
        other => panic!("expected TruncatedHeader, got {other:?}"),
    }
}

#[test]
fn short_buffer_rejected() {
    let data = bmp32(1, 1, &[BLACK]);
    let result = decode(&data[..53]);
    assert!(matches!(
        result,
        Err(BmpTextError::TruncatedHeader { needed: 54, actual: 53 })
    ));
}

#[test]
fn bad_magic_rejected() {
    let mut data = bmp32(1, 1, &[BLACK]);
    data[0] = b'X';
    assert!(matches!(decode(&data), Err(BmpTextError::NotABmpFile)));
}

/// The tag is two bytes in file order. A byte-swapped "MB" must be
/// rejected; reading the tag as a little-endian u16 would accept it.
#[test]
fn swapped_magic_rejected() {
    let mut data = bmp32(1, 1, &[BLACK]);
    data[0] = b'M';
    data[1] = b'B';
    assert!(matches!(decode(&data), Err(BmpTextError::NotABmpFile)));
}

#[test]
fn extended_info_header_rejected() {
    let mut data = bmp32(1, 1, &[BLACK]);
    data[14..18].copy_from_slice(&108u32.to_le_bytes()); // BITMAPV4HEADER
    assert!(matches!(
        decode(&data),
        Err(BmpTextError::UnsupportedHeaderVariant(108))
    ));
}

#[test]
fn depth_24_rejected() {
    let mut data = bmp32(1, 1, &[BLACK]);
    data[28..30].copy_from_slice(&24u16.to_le_bytes());
    assert!(matches!(
        decode(&data),
        Err(BmpTextError::UnsupportedBitDepth(24))
    ));
}

#[test]
fn rle8_compression_rejected() {
    let mut data = bmp32(1, 1, &[BLACK]);
    data[30..34].copy_from_slice(&1u32.to_le_bytes());
    assert!(matches!(
        decode(&data),
        Err(BmpTextError::UnsupportedCompression(Compression::Rle8))
    ));
}

#[test]
fn bitfields_compression_rejected() {
    let mut data = bmp32(1, 1, &[BLACK]);
    data[30..34].copy_from_slice(&3u32.to_le_bytes());
    assert!(matches!(
        decode(&data),
        Err(BmpTextError::UnsupportedCompression(Compression::BitFields))
    ));
}

#[test]
fn unknown_compression_rejected() {
    let mut data = bmp32(1, 1, &[BLACK]);
    data[30..34].copy_from_slice(&7u32.to_le_bytes());
    assert!(matches!(
        decode(&data),
        Err(BmpTextError::UnsupportedCompression(Compression::Unknown(7)))
    ));
}

#[test]
fn truncated_pixel_data_rejected() {
    // Declares 2x2 but carries only 3 pixel records.
    let data = bmp32(2, 2, &[BLACK, BLACK, BLACK]);
    assert!(matches!(
        decode(&data),
        Err(BmpTextError::TruncatedPixelData { needed: 70, actual: 66 })
    ));
}

#[test]
fn zero_width_rejected() {
    let data = bmp32(0, 1, &[BLACK]);
    assert!(matches!(decode(&data), Err(BmpTextError::EmptyImage)));
}

#[test]
fn zero_height_rejected() {
    let data = bmp32(1, 0, &[BLACK]);
    assert!(matches!(decode(&data), Err(BmpTextError::EmptyImage)));
}

// ── Header extraction ───────────────────────────────────────────────

#[test]
fn header_fields_extracted() {
    let data = bmp32(3, 2, &[BLACK; 6]);
    let image = decode(&data).unwrap();

    let file = image.file_header();
    assert_eq!(file.file_size, 54 + 24);
    assert_eq!(file.pixel_offset, 54);

    let info = image.info_header();
    assert_eq!(info.header_size, 40);
    assert_eq!(info.width, 3);
    assert_eq!(info.height, 2);
    assert_eq!(info.planes, 1);
    assert_eq!(info.bits_per_pixel, 32);
    assert_eq!(info.compression, Compression::None);
    assert_eq!(info.image_size, 24);
    assert_eq!(info.x_pixels_per_meter, 2835);
    assert_eq!(info.y_pixels_per_meter, 2835);
    assert_eq!(info.colors_used, 0);
    assert_eq!(info.colors_important, 0);

    assert_eq!(image.width(), 3);
    assert_eq!(image.height(), 2);
    assert_eq!(image.pixel_order(), PixelOrder::BottomUp);
}

#[test]
fn negative_height_means_top_down() {
    let data = bmp32(1, -2, &[BLACK, BLACK]);
    let image = decode(&data).unwrap();
    assert_eq!(image.height(), 2);
    assert_eq!(image.pixel_order(), PixelOrder::TopDown);
}

// ── Pixel view ──────────────────────────────────────────────────────

#[test]
fn pixel_view_matches_dimensions() {
    let data = bmp32(3, 2, &[BLACK; 6]);
    let image = decode(&data).unwrap();
    assert_eq!(image.pixels().len(), 6);
}

#[test]
fn pixel_channels_read_in_bgra_order() {
    let data = bmp32(1, 1, &[[10, 20, 30, 40]]);
    let image = decode(&data).unwrap();
    let pixel = image.pixel(0, 0);
    assert_eq!(pixel.b, 10);
    assert_eq!(pixel.g, 20);
    assert_eq!(pixel.r, 30);
    assert_eq!(pixel.a, 40);
}

/// Visual accessor: (0, 0) is the top-left corner for both row orders.
#[test]
fn bottom_up_accessor_flips_rows() {
    let top_left = [1, 1, 1, 255];
    let top_right = [2, 2, 2, 255];
    let bottom_left = [3, 3, 3, 255];
    let bottom_right = [4, 4, 4, 255];

    // Bottom-up storage: bottom row first.
    let data = bmp32(2, 2, &[bottom_left, bottom_right, top_left, top_right]);
    let image = decode(&data).unwrap();
    assert_eq!(image.pixel(0, 0).b, 1);
    assert_eq!(image.pixel(1, 0).b, 2);
    assert_eq!(image.pixel(0, 1).b, 3);
    assert_eq!(image.pixel(1, 1).b, 4);
}

#[test]
fn top_down_accessor_keeps_rows() {
    let data = bmp32(
        2,
        -2,
        &[
            [1, 1, 1, 255],
            [2, 2, 2, 255],
            [3, 3, 3, 255],
            [4, 4, 4, 255],
        ],
    );
    let image = decode(&data).unwrap();
    assert_eq!(image.pixel(0, 0).b, 1);
    assert_eq!(image.pixel(1, 0).b, 2);
    assert_eq!(image.pixel(0, 1).b, 3);
    assert_eq!(image.pixel(1, 1).b, 4);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view_borrows_storage_order() {
    let data = bmp32(2, 2, &[[1, 0, 0, 255], [2, 0, 0, 255], [3, 0, 0, 255], [4, 0, 0, 255]]);
    let image = decode(&data).unwrap();
    let img = image.as_imgref();
    assert_eq!(img.width(), 2);
    assert_eq!(img.height(), 2);
    // ImgRef keeps storage order: the first stored record comes first.
    assert_eq!(img.buf()[0].b, 1);
}

#[test]
fn trailing_bytes_after_pixels_accepted() {
    let mut data = bmp32(1, 1, &[BLACK]);
    data.extend_from_slice(&[0xAA; 16]);
    assert!(decode(&data).is_ok());
}

// ── Limits ──────────────────────────────────────────────────────────

#[test]
fn limits_reject_large_pixel_count() {
    let data = bmp32(2, 2, &[BLACK; 4]);
    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };
    let result = DecodeRequest::new(&data).with_limits(&limits).decode();
    assert!(matches!(result, Err(BmpTextError::LimitExceeded(_))));
}

#[test]
fn limits_reject_wide_image() {
    let data = bmp32(2, 1, &[BLACK; 2]);
    let limits = Limits {
        max_width: Some(1),
        ..Default::default()
    };
    let result = DecodeRequest::new(&data).with_limits(&limits).decode();
    assert!(matches!(result, Err(BmpTextError::LimitExceeded(_))));
}

#[test]
fn limits_allow_conforming_image() {
    let data = bmp32(2, 2, &[BLACK; 4]);
    let limits = Limits {
        max_width: Some(2),
        max_height: Some(2),
        max_pixels: Some(4),
    };
    assert!(DecodeRequest::new(&data).with_limits(&limits).decode().is_ok());
}
