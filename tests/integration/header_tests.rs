//! Header scan integration tests.
//!
//! Tests verify:
//! - Width and height come from any size-carrying frame header
//! - EXIF orientation is found for both TIFF byte orders
//! - Orientations 5-8 swap the reported dimensions
//! - The scan stops at 64 KiB even when size data exists further on

use jpeg_header::{FormatError, Orientation, ParsedHeader, MAX_SCAN_LENGTH, NO_ORIENTATION};

use super::test_utils::{
    create_test_rgb_jpeg, filler_segment, frame_segment, insert_after_soi, segment,
    ByteOrderType, ExifBuilder, JpegBuilder,
};

// =============================================================================
// Dimensions
// =============================================================================

#[test]
fn test_minimal_jpeg_dimensions() {
    let data = JpegBuilder::new().with_frame(100, 50).build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!(header.width(), 100);
    assert_eq!(header.height(), 50);
    assert_eq!(header.orientation(), None);
    assert_eq!(header.image_orientation(), NO_ORIENTATION);
}

#[test]
fn test_dimensions_after_table_segments() {
    let data = JpegBuilder::new()
        .with_jfif()
        .with_dqt()
        .with_frame(1920, 1080)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (1920, 1080));
}

#[test]
fn test_progressive_and_arithmetic_frames() {
    for marker in [0xFFC1, 0xFFC2, 0xFFC3, 0xFFC9, 0xFFCA, 0xFFCF] {
        let data = JpegBuilder::new()
            .with_segment(frame_segment(marker, 321, 123))
            .build();

        let header = ParsedHeader::parse(&data).unwrap();
        assert_eq!(
            (header.width(), header.height()),
            (321, 123),
            "marker 0x{:04X}",
            marker
        );
    }
}

#[test]
fn test_dht_segment_is_skipped() {
    // A DHT payload shaped like a frame header must not be read as one
    let data = JpegBuilder::new()
        .with_segment(frame_segment(0xFFC4, 999, 999))
        .with_frame(64, 48)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (64, 48));
}

#[test]
fn test_real_encoded_jpeg() {
    let data = create_test_rgb_jpeg(37, 21, 90);

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (37, 21));
    assert_eq!(header.image_orientation(), -1);
}

// =============================================================================
// Orientation
// =============================================================================

#[test]
fn test_orientation_6_swaps_dimensions() {
    let data = JpegBuilder::new()
        .with_exif(&ExifBuilder::new().with_orientation(6))
        .with_frame(100, 50)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!(header.width(), 50);
    assert_eq!(header.height(), 100);
    assert_eq!(header.image_orientation(), 6);
    assert_eq!(header.orientation_kind(), Some(Orientation::Rotate90));
}

#[test]
fn test_orientation_3_keeps_dimensions() {
    let data = JpegBuilder::new()
        .with_exif(&ExifBuilder::new().with_orientation(3))
        .with_frame(100, 50)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (100, 50));
    assert_eq!(header.image_orientation(), 3);
}

#[test]
fn test_every_orientation_code() {
    for code in 1..=8u16 {
        let data = JpegBuilder::new()
            .with_exif(&ExifBuilder::new().with_orientation(code))
            .with_frame(640, 480)
            .build();

        let header = ParsedHeader::parse(&data).unwrap();
        let expected = if code > 4 { (480, 640) } else { (640, 480) };
        assert_eq!((header.width(), header.height()), expected, "orientation {}", code);
        assert_eq!(header.image_orientation(), i32::from(code));
    }
}

#[test]
fn test_exif_after_frame_header() {
    let data = JpegBuilder::new()
        .with_frame(100, 50)
        .with_exif(&ExifBuilder::new().with_orientation(8))
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (50, 100));
    assert_eq!(header.orientation(), Some(8));
}

#[test]
fn test_little_and_big_endian_exif() {
    for order in [ByteOrderType::LittleEndian, ByteOrderType::BigEndian] {
        let exif = ExifBuilder::new()
            .with_byte_order(order)
            .with_entry(0x010F, 0x4142) // Make
            .with_entry(0x0110, 0x4344) // Model
            .with_orientation(6)
            .with_entry(0x011A, 72); // XResolution

        let data = JpegBuilder::new().with_exif(&exif).with_frame(100, 50).build();

        let header = ParsedHeader::parse(&data).unwrap();
        assert_eq!(header.orientation(), Some(6));
        assert_eq!((header.width(), header.height()), (50, 100));
    }
}

#[test]
fn test_ifd_offset_is_relative_to_tiff_header() {
    for order in [ByteOrderType::LittleEndian, ByteOrderType::BigEndian] {
        let exif = ExifBuilder::new()
            .with_byte_order(order)
            .with_ifd_gap(20)
            .with_orientation(5);

        let data = JpegBuilder::new().with_exif(&exif).with_frame(30, 10).build();

        let header = ParsedHeader::parse(&data).unwrap();
        assert_eq!(header.orientation(), Some(5));
        assert_eq!((header.width(), header.height()), (10, 30));
    }
}

#[test]
fn test_first_orientation_entry_wins() {
    let exif = ExifBuilder::new().with_orientation(2).with_orientation(7);
    let data = JpegBuilder::new().with_exif(&exif).with_frame(100, 50).build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!(header.orientation(), Some(2));
    assert_eq!((header.width(), header.height()), (100, 50));
}

#[test]
fn test_exif_without_orientation() {
    let exif = ExifBuilder::new().with_entry(0x010F, 1).with_entry(0x0131, 2);
    let data = JpegBuilder::new().with_exif(&exif).with_frame(100, 50).build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!(header.orientation(), None);
    assert_eq!(header.image_orientation(), -1);
}

#[test]
fn test_non_exif_app1_is_ignored() {
    let xmp = segment(0xFFE1, b"http://ns.adobe.com/xap/1.0/\0<x:xmpmeta/>");
    let data = JpegBuilder::new()
        .with_segment(xmp)
        .with_frame(100, 50)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!(header.orientation(), None);
    assert_eq!((header.width(), header.height()), (100, 50));
}

#[test]
fn test_real_jpeg_with_inserted_exif() {
    let jpeg = create_test_rgb_jpeg(37, 21, 80);
    let exif = ExifBuilder::new()
        .with_byte_order(ByteOrderType::LittleEndian)
        .with_orientation(8);
    let data = insert_after_soi(&jpeg, &exif.build_segment());

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (21, 37));
    assert_eq!(header.orientation_kind(), Some(Orientation::Rotate270));
}

#[test]
fn test_parse_is_idempotent() {
    let data = JpegBuilder::new()
        .with_exif(&ExifBuilder::new().with_orientation(6))
        .with_frame(100, 50)
        .build();

    let first = ParsedHeader::parse(&data).unwrap();
    let second = ParsedHeader::parse(&data).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scan_stops_once_all_values_known() {
    let data = JpegBuilder::new()
        .with_exif(&ExifBuilder::new().with_orientation(1))
        .with_frame(100, 50)
        .with_frame(300, 200)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (100, 50));
    assert_eq!(header.orientation(), Some(1));
}

#[test]
fn test_orientation_zero_counts_as_known() {
    // Code 0 is outside 1-8 but still ends the scan at the first frame header
    let data = JpegBuilder::new()
        .with_exif(&ExifBuilder::new().with_orientation(0))
        .with_frame(100, 50)
        .with_frame(300, 200)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (100, 50));
    assert_eq!(header.orientation(), Some(0));
    assert_eq!(header.image_orientation(), 0);
    assert_eq!(header.orientation_kind(), None);
}

#[test]
fn test_later_frame_header_overwrites_earlier() {
    let data = JpegBuilder::new()
        .with_frame(100, 50)
        .with_frame(300, 200)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (300, 200));
    assert_eq!(header.orientation(), None);
}

#[test]
fn test_zero_dimension_filled_by_later_frame() {
    let data = JpegBuilder::new()
        .with_frame(0, 50)
        .with_frame(300, 200)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (300, 200));
}

// =============================================================================
// Errors and Scan Bound
// =============================================================================

#[test]
fn test_not_a_jpeg() {
    let png = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";
    assert_eq!(
        ParsedHeader::parse(png),
        Err(FormatError::MissingStartOfImage)
    );
}

#[test]
fn test_no_frame_header() {
    let data = JpegBuilder::new().with_jfif().with_dqt().build();
    assert_eq!(
        ParsedHeader::parse(&data),
        Err(FormatError::IncompleteHeader)
    );
}

#[test]
fn test_errors_are_distinguishable() {
    let not_jpeg = ParsedHeader::parse(&[0x00, 0x00]).unwrap_err();
    let incomplete = ParsedHeader::parse(&[0xFF, 0xD8]).unwrap_err();

    assert_ne!(not_jpeg, incomplete);
    assert_eq!(not_jpeg.to_string(), "missing start-of-image marker");
    assert_eq!(incomplete.to_string(), "invalid or incomplete JPEG header");
}

#[test]
fn test_truncated_after_size_marker() {
    let data = JpegBuilder::new().with_jfif().with_frame(100, 50).build();
    let sof_start = data.len() - frame_segment(0xFFC0, 100, 50).len();

    assert_eq!(
        ParsedHeader::parse(&data[..sof_start + 2]),
        Err(FormatError::IncompleteHeader)
    );
}

#[test]
fn test_frame_header_inside_scan_bound() {
    let data = JpegBuilder::new()
        .with_segment(filler_segment(60_000))
        .with_frame(800, 600)
        .build();

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (800, 600));
}

#[test]
fn test_frame_marker_at_last_scanned_offset() {
    // SOI (2) + 40_002 + 25_530 puts the frame marker at offset 65_534
    let data = JpegBuilder::new()
        .with_segment(filler_segment(40_002))
        .with_segment(filler_segment(25_530))
        .with_frame(800, 600)
        .build();
    assert_eq!(data[MAX_SCAN_LENGTH - 2..MAX_SCAN_LENGTH], [0xFF, 0xC0]);

    let header = ParsedHeader::parse(&data).unwrap();
    assert_eq!((header.width(), header.height()), (800, 600));
}

#[test]
fn test_frame_header_past_scan_bound() {
    // SOI (2) + 40_002 + 25_542 puts the frame marker at offset 64 * 1024 + 10
    let data = JpegBuilder::new()
        .with_segment(filler_segment(40_002))
        .with_segment(filler_segment(25_542))
        .with_frame(800, 600)
        .build();
    assert_eq!(data[MAX_SCAN_LENGTH + 10..MAX_SCAN_LENGTH + 12], [0xFF, 0xC0]);

    assert_eq!(
        ParsedHeader::parse(&data),
        Err(FormatError::IncompleteHeader)
    );
}
