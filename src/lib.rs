//! # jpeg-header
//!
//! Reads the pixel dimensions and EXIF display orientation of a JPEG image
//! from its marker segments, without decoding any image data.
//!
//! Layout engines use this to size an image before placing it: the reported
//! width and height are already swapped when the EXIF orientation rotates the
//! image by a quarter turn.
//!
//! ## Architecture
//!
//! - [`mod@format`] - marker segment walk, EXIF orientation lookup, validity check
//! - [`io`] - bounds-checked endian reads
//! - [`probe`] - file probing with serializable reports
//! - [`config`] - CLI configuration
//!
//! ## Example
//!
//! ```rust
//! use jpeg_header::{is_valid, ParsedHeader};
//!
//! // SOI followed by a baseline frame header for a 100x50 image
//! let data: [u8; 15] = [
//!     0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x32, 0x00, 0x64, 0x01, 0x01, 0x11,
//!     0x00,
//! ];
//!
//! assert!(is_valid(data));
//! let header = ParsedHeader::parse(&data).unwrap();
//! assert_eq!((header.width(), header.height()), (100, 50));
//! assert_eq!(header.image_orientation(), -1);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod probe;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{FormatError, ProbeError};
pub use format::{
    is_size_marker, is_valid, is_valid_candidate, read_orientation, ByteOrder, Orientation,
    ParsedHeader, SizeMarker, TiffReader, MAX_SCAN_LENGTH, NO_ORIENTATION,
};
pub use probe::{check_bytes, check_path, parse_path, probe_bytes, probe_path, ProbeReport};
