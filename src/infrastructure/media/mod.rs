//! Local image inspection and metadata rewriting.
//!
//! Fast, synchronous operations performed inside the download worker:
//!
//! - [`validator`] - EXIF capture-year and size-floor validation (fail-open)
//! - [`normalizer`] - Best-effort synthetic file timestamp rewriting

pub mod normalizer;
pub mod validator;

pub use normalizer::{normalize_timestamp, synthetic_timestamp};
pub use validator::{MIN_IMAGE_BYTES, validate_image};
