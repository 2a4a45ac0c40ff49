#![allow(dead_code)]

/// Builds a minimal little-endian TIFF carrying a single EXIF
/// `DateTimeOriginal` field for the given year, zero-padded to `total_len`
/// bytes so size-floor behavior can be exercised independently.
///
/// Layout: header (8 bytes), IFD0 with an Exif sub-IFD pointer (18 bytes at
/// offset 8), the Exif IFD with the DateTimeOriginal entry (18 bytes at
/// offset 26), and the 20-byte ASCII datetime value at offset 44.
pub fn tiff_with_capture_year(year: i32, total_len: usize) -> Vec<u8> {
    let datetime = format!("{year:04}:06:01 12:00:00\0");
    assert_eq!(datetime.len(), 20);

    let mut buf = Vec::with_capacity(total_len);
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());

    // IFD0: one entry pointing at the Exif sub-IFD.
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x8769u16.to_le_bytes());
    buf.extend_from_slice(&4u16.to_le_bytes()); // LONG
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&26u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());

    // Exif IFD: DateTimeOriginal, 20-byte ASCII value stored out of line.
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x9003u16.to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes()); // ASCII
    buf.extend_from_slice(&20u32.to_le_bytes());
    buf.extend_from_slice(&44u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());

    buf.extend_from_slice(datetime.as_bytes());

    if total_len > buf.len() {
        buf.resize(total_len, 0);
    }
    buf
}
