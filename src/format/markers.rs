//! JPEG marker and EXIF constant definitions.
//!
//! Markers are handled as big-endian 16-bit codes (`0xFFxx`), the same way
//! they are read out of the stream.

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: u16 = 0xFFD8;

/// Application segment 1 (EXIF) marker
pub const APP1: u16 = 0xFFE1;

// =============================================================================
// EXIF / TIFF Constants
// =============================================================================

/// "Exif" read as a big-endian u32, found at the start of an EXIF APP1 payload
pub const EXIF_SIGNATURE: u32 = 0x4578_6966;

/// "II" byte order mark selecting little-endian TIFF reads
pub const TIFF_LITTLE_ENDIAN: u16 = 0x4949;

/// EXIF Orientation tag id
pub const ORIENTATION_TAG: u16 = 0x0112;

/// Size of a classic TIFF IFD entry (2 tag + 2 type + 4 count + 4 value/offset)
pub const IFD_ENTRY_SIZE: usize = 12;

// =============================================================================
// Size Markers
// =============================================================================

/// Start-of-frame markers whose segment carries the image dimensions.
///
/// Every variant shares the same frame header layout: segment length (2),
/// sample precision (1), height (2), width (2). DHT (`0xFFC4`) sits inside the
/// SOF range but is not a frame header and is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum SizeMarker {
    /// Baseline DCT
    Sof0 = 0xFFC0,
    /// Extended sequential DCT, Huffman
    Sof1 = 0xFFC1,
    /// Progressive DCT, Huffman
    Sof2 = 0xFFC2,
    /// Lossless, Huffman
    Sof3 = 0xFFC3,
    /// Differential sequential DCT, Huffman
    Sof5 = 0xFFC5,
    /// Differential progressive DCT, Huffman
    Sof6 = 0xFFC6,
    /// Differential lossless, Huffman
    Sof7 = 0xFFC7,
    /// JPG extension (reserved)
    Jpg = 0xFFC8,
    /// Extended sequential DCT, arithmetic
    Sof9 = 0xFFC9,
    /// Progressive DCT, arithmetic
    Sof10 = 0xFFCA,
    /// Lossless, arithmetic
    Sof11 = 0xFFCB,
    /// Define arithmetic coding conditioning
    Dac = 0xFFCC,
    /// Differential sequential DCT, arithmetic
    Sof13 = 0xFFCD,
    /// Differential progressive DCT, arithmetic
    Sof14 = 0xFFCE,
    /// Differential lossless, arithmetic
    Sof15 = 0xFFCF,
}

impl SizeMarker {
    /// All size markers, in code order.
    pub const ALL: [SizeMarker; 15] = [
        SizeMarker::Sof0,
        SizeMarker::Sof1,
        SizeMarker::Sof2,
        SizeMarker::Sof3,
        SizeMarker::Sof5,
        SizeMarker::Sof6,
        SizeMarker::Sof7,
        SizeMarker::Jpg,
        SizeMarker::Sof9,
        SizeMarker::Sof10,
        SizeMarker::Sof11,
        SizeMarker::Dac,
        SizeMarker::Sof13,
        SizeMarker::Sof14,
        SizeMarker::Sof15,
    ];

    /// Create a SizeMarker from its 16-bit marker code.
    ///
    /// Returns `None` for any marker that does not carry dimensions.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            0xFFC0 => Some(SizeMarker::Sof0),
            0xFFC1 => Some(SizeMarker::Sof1),
            0xFFC2 => Some(SizeMarker::Sof2),
            0xFFC3 => Some(SizeMarker::Sof3),
            0xFFC5 => Some(SizeMarker::Sof5),
            0xFFC6 => Some(SizeMarker::Sof6),
            0xFFC7 => Some(SizeMarker::Sof7),
            0xFFC8 => Some(SizeMarker::Jpg),
            0xFFC9 => Some(SizeMarker::Sof9),
            0xFFCA => Some(SizeMarker::Sof10),
            0xFFCB => Some(SizeMarker::Sof11),
            0xFFCC => Some(SizeMarker::Dac),
            0xFFCD => Some(SizeMarker::Sof13),
            0xFFCE => Some(SizeMarker::Sof14),
            0xFFCF => Some(SizeMarker::Sof15),
            _ => None,
        }
    }

    /// The 16-bit marker code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Short mnemonic, as used in the JPEG standard.
    pub const fn name(self) -> &'static str {
        match self {
            SizeMarker::Sof0 => "SOF0",
            SizeMarker::Sof1 => "SOF1",
            SizeMarker::Sof2 => "SOF2",
            SizeMarker::Sof3 => "SOF3",
            SizeMarker::Sof5 => "SOF5",
            SizeMarker::Sof6 => "SOF6",
            SizeMarker::Sof7 => "SOF7",
            SizeMarker::Jpg => "JPG",
            SizeMarker::Sof9 => "SOF9",
            SizeMarker::Sof10 => "SOF10",
            SizeMarker::Sof11 => "SOF11",
            SizeMarker::Dac => "DAC",
            SizeMarker::Sof13 => "SOF13",
            SizeMarker::Sof14 => "SOF14",
            SizeMarker::Sof15 => "SOF15",
        }
    }
}

/// Check whether a marker code carries image dimensions.
#[inline]
pub fn is_size_marker(code: u16) -> bool {
    SizeMarker::from_u16(code).is_some()
}
