// =============================================================================
// Endian Helper Functions
// =============================================================================
//
// JPEG marker segments are always big-endian, while the TIFF structure inside
// an EXIF block declares its own byte order. The header scanner reads straight
// out of caller-owned buffers that may be truncated anywhere, so every helper
// is bounds-checked and returns `None` rather than panicking.

/// Borrow `N` bytes starting at `offset`, if they are all in bounds.
#[inline]
fn window<const N: usize>(bytes: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    bytes.get(offset..end)?.try_into().ok()
}

/// Read a little-endian u16 at `offset`.
#[inline]
pub fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    window::<2>(bytes, offset).map(u16::from_le_bytes)
}

/// Read a big-endian u16 at `offset`.
#[inline]
pub fn read_u16_be(bytes: &[u8], offset: usize) -> Option<u16> {
    window::<2>(bytes, offset).map(u16::from_be_bytes)
}

/// Read a little-endian u32 at `offset`.
#[inline]
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    window::<4>(bytes, offset).map(u32::from_le_bytes)
}

/// Read a big-endian u32 at `offset`.
#[inline]
pub fn read_u32_be(bytes: &[u8], offset: usize) -> Option<u32> {
    window::<4>(bytes, offset).map(u32::from_be_bytes)
}
