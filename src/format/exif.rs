//! EXIF orientation lookup.
//!
//! An EXIF APP1 payload is laid out as:
//!
//! ```text
//! Bytes 0-3:  "Exif"
//! Bytes 4-5:  padding (0x0000)
//! Bytes 6-7:  TIFF byte order ("II" = little-endian, "MM" = big-endian)
//! Bytes 8-9:  TIFF version (42)
//! Bytes 10-13: offset to IFD0, relative to byte 6
//! ```
//!
//! IFD0 holds a 16-bit entry count followed by 12-byte entries. Only the
//! Orientation tag is read; every other entry is skipped.

use serde::Serialize;

use crate::io::{read_u16_be, read_u16_le, read_u32_be, read_u32_le};

use super::markers::{EXIF_SIGNATURE, IFD_ENTRY_SIZE, ORIENTATION_TAG, TIFF_LITTLE_ENDIAN};

/// Distance from the "Exif" signature to the TIFF header.
const TIFF_HEADER_OFFSET: usize = 6;

/// Distance from the TIFF header to its IFD0 offset field.
const IFD_OFFSET_FIELD: usize = 4;

/// Distance from the start of an IFD entry to its value field.
const ENTRY_VALUE_OFFSET: usize = 8;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of the TIFF structure embedded in EXIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Pick the byte order from the TIFF order mark.
    ///
    /// Only "II" selects little-endian; any other mark reads as big-endian.
    pub fn from_mark(mark: u16) -> Self {
        if mark == TIFF_LITTLE_ENDIAN {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Read a u16 at `offset` using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8], offset: usize) -> Option<u16> {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes, offset),
            ByteOrder::BigEndian => read_u16_be(bytes, offset),
        }
    }

    /// Read a u32 at `offset` using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8], offset: usize) -> Option<u32> {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes, offset),
            ByteOrder::BigEndian => read_u32_be(bytes, offset),
        }
    }
}

// =============================================================================
// TiffReader
// =============================================================================

/// Reads a TIFF structure whose byte order was fixed once, up front.
#[derive(Debug, Clone, Copy)]
pub struct TiffReader<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
}

impl<'a> TiffReader<'a> {
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self { data, byte_order }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    #[inline]
    pub fn read_u16(&self, offset: usize) -> Option<u16> {
        self.byte_order.read_u16(self.data, offset)
    }

    #[inline]
    pub fn read_u32(&self, offset: usize) -> Option<u32> {
        self.byte_order.read_u32(self.data, offset)
    }

    /// Absolute position of IFD0 for the TIFF header at `tiff_base`.
    pub fn first_ifd(&self, tiff_base: usize) -> Option<usize> {
        let relative = self.read_u32(tiff_base.checked_add(IFD_OFFSET_FIELD)?)?;
        tiff_base.checked_add(usize::try_from(relative).ok()?)
    }

    /// Find the first entry with `tag` in the IFD at `ifd` and return its
    /// 16-bit value. Entries after the first match are never looked at.
    pub fn find_u16_entry(&self, ifd: usize, tag: u16) -> Option<u16> {
        let count = self.read_u16(ifd)?;
        let entries = ifd.checked_add(2)?;

        for i in 0..usize::from(count) {
            let entry = entries.checked_add(i * IFD_ENTRY_SIZE)?;
            if self.read_u16(entry)? == tag {
                return self.read_u16(entry + ENTRY_VALUE_OFFSET);
            }
        }

        None
    }
}

/// Read the EXIF Orientation value from an APP1 payload.
///
/// `exif_offset` points at the expected "Exif" signature (two bytes past the
/// segment length field). Returns `None` when the payload is not EXIF, the
/// tag is absent, or any read would run past the end of `data`.
pub fn read_orientation(data: &[u8], exif_offset: usize) -> Option<u16> {
    if read_u32_be(data, exif_offset)? != EXIF_SIGNATURE {
        return None;
    }

    let tiff_base = exif_offset.checked_add(TIFF_HEADER_OFFSET)?;
    let byte_order = ByteOrder::from_mark(read_u16_be(data, tiff_base)?);
    let reader = TiffReader::new(data, byte_order);

    let ifd = reader.first_ifd(tiff_base)?;
    reader.find_u16_entry(ifd, ORIENTATION_TAG)
}

// =============================================================================
// Orientation
// =============================================================================

/// EXIF display orientation (tag 0x0112).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum Orientation {
    /// Row 0 at top, column 0 at left
    Normal = 1,
    /// Mirrored left to right
    FlipHorizontal = 2,
    /// Upside down
    Rotate180 = 3,
    /// Mirrored top to bottom
    FlipVertical = 4,
    /// Mirrored along the top-left diagonal
    Transpose = 5,
    /// Rotated 90 degrees clockwise for display
    Rotate90 = 6,
    /// Mirrored along the top-right diagonal
    Transverse = 7,
    /// Rotated 270 degrees clockwise for display
    Rotate270 = 8,
}

impl Orientation {
    /// Create an Orientation from its EXIF code.
    ///
    /// Returns `None` for codes outside 1-8.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(Orientation::Normal),
            2 => Some(Orientation::FlipHorizontal),
            3 => Some(Orientation::Rotate180),
            4 => Some(Orientation::FlipVertical),
            5 => Some(Orientation::Transpose),
            6 => Some(Orientation::Rotate90),
            7 => Some(Orientation::Transverse),
            8 => Some(Orientation::Rotate270),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Whether displaying the image exchanges its width and height.
    #[inline]
    pub const fn swaps_dimensions(self) -> bool {
        swaps_dimensions(self as u16)
    }
}

/// Codes 5-8 involve a quarter turn, so the displayed image is transposed.
#[inline]
pub(crate) const fn swaps_dimensions(code: u16) -> bool {
    code > 4
}
