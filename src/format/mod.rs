//! JPEG header parsing.
//!
//! - [`jpeg`]: marker segment walk, [`ParsedHeader`] and the quick validity check
//! - [`exif`]: orientation lookup inside the EXIF/TIFF block of an APP1 segment
//! - [`markers`]: marker codes and the set of size-carrying frame markers

pub mod exif;
pub mod jpeg;
pub mod markers;

pub use exif::{read_orientation, ByteOrder, Orientation, TiffReader};
pub use jpeg::{is_valid, is_valid_candidate, ParsedHeader, MAX_SCAN_LENGTH, NO_ORIENTATION};
pub use markers::{is_size_marker, SizeMarker};
