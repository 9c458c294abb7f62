//! JPEG header scanning.
//!
//! Reads width, height and EXIF orientation from the marker segments at the
//! start of a JPEG stream. No entropy-coded data is touched.
//!
//! # Segment Walk
//!
//! ```text
//! FFD8                          SOI
//! FFxx LLLL <LLLL-2 bytes>      marker segment (length includes itself)
//! FFC0 LLLL PP HHHH WWWW ...    frame header: precision, height, width
//! FFE1 LLLL "Exif" 0000 <TIFF>  EXIF block carrying the orientation tag
//! ```
//!
//! The walk trusts each segment's length field and jumps from marker to
//! marker. The full parse stops after [`MAX_SCAN_LENGTH`] bytes; the quick
//! validity check has no such bound.

use std::any::Any;

use bytes::Bytes;
use serde::Serialize;

use crate::error::FormatError;
use crate::io::read_u16_be;

use super::exif::{read_orientation, swaps_dimensions, Orientation};
use super::markers::{is_size_marker, APP1, SOI};

// =============================================================================
// Constants
// =============================================================================

/// Upper bound on how far into the buffer the header scan walks.
///
/// Image metadata lives in the header region near the start of the file;
/// anything not found by this point is treated as missing.
pub const MAX_SCAN_LENGTH: usize = 64 * 1024;

/// Value returned by [`ParsedHeader::image_orientation`] when no EXIF
/// orientation was found.
pub const NO_ORIENTATION: i32 = -1;

/// Frame header: height sits past the length field and precision byte.
const FRAME_HEIGHT_OFFSET: usize = 3;

/// Frame header: width follows the height.
const FRAME_WIDTH_OFFSET: usize = 5;

/// APP1: "Exif" follows the length field.
const APP1_SIGNATURE_OFFSET: usize = 2;

// =============================================================================
// ParsedHeader
// =============================================================================

/// Dimensions and orientation read from a JPEG header.
///
/// Width and height are display dimensions: when the EXIF orientation calls
/// for a quarter turn they have already been swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedHeader {
    width: u16,
    height: u16,
    orientation: Option<u16>,
}

impl ParsedHeader {
    /// Scan a JPEG byte stream.
    ///
    /// # Errors
    /// - `MissingStartOfImage` if the buffer does not start with `FF D8`
    /// - `IncompleteHeader` if no frame header with non-zero dimensions is
    ///   found within the first [`MAX_SCAN_LENGTH`] bytes
    pub fn parse(data: &[u8]) -> Result<Self, FormatError> {
        if read_u16_be(data, 0) != Some(SOI) {
            return Err(FormatError::MissingStartOfImage);
        }

        let mut scan = HeaderScan::default();
        let mut offset = 2;
        let max_scan_length = MAX_SCAN_LENGTH.min(data.len());

        while offset < max_scan_length {
            let Some(marker) = read_u16_be(data, offset) else {
                break;
            };
            offset += 2;

            if is_size_marker(marker) {
                scan.height = read_u16_be(data, offset + FRAME_HEIGHT_OFFSET);
                scan.width = read_u16_be(data, offset + FRAME_WIDTH_OFFSET);
            } else if marker == APP1 {
                if let Some(orientation) = read_orientation(data, offset + APP1_SIGNATURE_OFFSET) {
                    scan.orientation = Some(orientation);
                }
            }

            if scan.is_complete() {
                break;
            }

            let Some(length) = read_u16_be(data, offset) else {
                break;
            };
            offset += usize::from(length);
        }

        scan.finish()
    }

    /// Display width in pixels.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Display height in pixels.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw EXIF orientation code, if the stream carried one.
    #[inline]
    pub fn orientation(&self) -> Option<u16> {
        self.orientation
    }

    /// EXIF orientation code, or [`NO_ORIENTATION`] (-1) when absent.
    ///
    /// -1 is distinct from orientation 1 ("normal").
    pub fn image_orientation(&self) -> i32 {
        self.orientation.map_or(NO_ORIENTATION, i32::from)
    }

    /// The orientation as a known EXIF value.
    ///
    /// Returns `None` when absent or outside 1-8.
    pub fn orientation_kind(&self) -> Option<Orientation> {
        self.orientation.and_then(Orientation::from_u16)
    }
}

impl TryFrom<&[u8]> for ParsedHeader {
    type Error = FormatError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        ParsedHeader::parse(data)
    }
}

// =============================================================================
// HeaderScan
// =============================================================================

/// Values found so far during a scan.
///
/// A zero dimension counts as not found, so a later frame header can still
/// supply it and a zero never reaches a [`ParsedHeader`].
#[derive(Debug, Default)]
struct HeaderScan {
    width: Option<u16>,
    height: Option<u16>,
    orientation: Option<u16>,
}

impl HeaderScan {
    fn dimensions(&self) -> Option<(u16, u16)> {
        let width = self.width.filter(|&w| w > 0)?;
        let height = self.height.filter(|&h| h > 0)?;
        Some((width, height))
    }

    fn is_complete(&self) -> bool {
        self.dimensions().is_some() && self.orientation.is_some()
    }

    fn finish(self) -> Result<ParsedHeader, FormatError> {
        let (mut width, mut height) = self.dimensions().ok_or(FormatError::IncompleteHeader)?;

        if self.orientation.is_some_and(swaps_dimensions) {
            std::mem::swap(&mut width, &mut height);
        }

        Ok(ParsedHeader {
            width,
            height,
            orientation: self.orientation,
        })
    }
}

// =============================================================================
// Validity Check
// =============================================================================

/// Check whether a buffer looks like a JPEG whose size can be read.
///
/// Walks segments from the start of the buffer until a frame header marker
/// appears. Unlike [`ParsedHeader::parse`] the walk is not bounded to the
/// first [`MAX_SCAN_LENGTH`] bytes, and nothing is extracted. Never panics.
pub fn is_valid(data: impl AsRef<[u8]>) -> bool {
    let data = data.as_ref();

    if read_u16_be(data, 0) != Some(SOI) {
        return false;
    }

    let mut offset = 2;
    while offset < data.len() {
        let Some(marker) = read_u16_be(data, offset) else {
            return false;
        };
        offset += 2;

        if is_size_marker(marker) {
            return true;
        }

        let Some(length) = read_u16_be(data, offset) else {
            return false;
        };
        offset += usize::from(length);
    }

    false
}

/// Validity check over an arbitrary, possibly absent value.
///
/// Byte buffers (`Vec<u8>`, `Bytes`, `Box<[u8]>`, `&'static [u8]`) are
/// checked with [`is_valid`]; `None` and any other type are `false`.
pub fn is_valid_candidate(candidate: Option<&dyn Any>) -> bool {
    let Some(candidate) = candidate else {
        return false;
    };

    if let Some(data) = candidate.downcast_ref::<Vec<u8>>() {
        is_valid(data)
    } else if let Some(data) = candidate.downcast_ref::<Bytes>() {
        is_valid(data)
    } else if let Some(data) = candidate.downcast_ref::<Box<[u8]>>() {
        is_valid(data)
    } else if let Some(data) = candidate.downcast_ref::<&'static [u8]>() {
        is_valid(data)
    } else {
        false
    }
}

// =============================================================================
// Tests
// =============================================================================
