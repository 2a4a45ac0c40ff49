//! Synthetic file timestamp normalization.

use std::path::Path;

use chrono::NaiveDate;
use filetime::FileTime;
use tracing::debug;

/// Rewrites the file's access and modification times to noon on the first
/// day of (year, month), UTC.
///
/// Best-effort and unconditional: any failure (missing file, permissions,
/// nonsensical date) is logged at debug level and swallowed. This step is
/// cosmetic and must never affect the caller's outcome.
pub fn normalize_timestamp(path: &Path, year: i32, month: u32) {
    let Some(timestamp) = synthetic_timestamp(year, month) else {
        debug!(year, month, "no synthetic timestamp for period");
        return;
    };

    let filetime = FileTime::from_unix_time(timestamp, 0);
    if let Err(error) = filetime::set_file_times(path, filetime, filetime) {
        debug!(path = %path.display(), %error, "failed to rewrite file timestamp");
    }
}

/// Unix timestamp of noon UTC on the first day of (year, month), or `None`
/// if the pair does not name a calendar month.
pub fn synthetic_timestamp(year: i32, month: u32) -> Option<i64> {
    let noon = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(12, 0, 0)?;
    Some(noon.and_utc().timestamp())
}
