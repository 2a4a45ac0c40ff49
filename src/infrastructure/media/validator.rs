//! Temporal and size validation of downloaded images.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Reader, Tag};

use crate::error::RejectReason;

/// Minimum size in bytes for an image to be kept. Anything at or below this
/// is assumed to be a thumbnail or placeholder.
pub const MIN_IMAGE_BYTES: u64 = 20_000;

/// Validates a downloaded image against the target year and the size floor.
///
/// The policy is fail-open: a file that cannot be opened or inspected passes,
/// because many legitimate historical images carry no embedded metadata and a
/// corrupt-but-present file is not rejected for that reason alone. The one
/// hard rejection signal is an embedded capture year that differs from
/// `target_year`; otherwise the image is kept iff its size strictly exceeds
/// [`MIN_IMAGE_BYTES`].
pub fn validate_image(path: &Path, target_year: i32) -> Result<(), RejectReason> {
    if let Some(found) = capture_year(path)
        && found != target_year
    {
        return Err(RejectReason::YearMismatch { found });
    }

    match std::fs::metadata(path) {
        Ok(meta) if meta.len() <= MIN_IMAGE_BYTES => {
            Err(RejectReason::TooSmall { size: meta.len() })
        }
        // Unreadable metadata is fail-open.
        _ => Ok(()),
    }
}

/// Reads the EXIF `DateTimeOriginal` year from the file, if any.
///
/// Every failure mode (unreadable file, no EXIF container, missing tag,
/// unparseable value) collapses to `None`.
fn capture_year(path: &Path) -> Option<i32> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(&file);
    let exif = Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;

    // Both raw ("2015:06:01 12:00:00") and formatted ("2015-06-01 12:00:00")
    // renderings start with the four year digits.
    let value = field.display_value().to_string();
    value.get(..4)?.parse().ok()
}
