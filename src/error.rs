//! Error taxonomy for the acquisition pipeline.
//!
//! No error here is fatal to a run. Each type is scoped to one unit of work
//! (one provider query, one URL download) and is handled where the work is
//! dispatched: provider errors degrade to an empty candidate list, fetch
//! errors become a failed outcome for that URL, and rejections delete the
//! offending file. The pipeline degrades to "zero results for this period"
//! instead of aborting.

use reqwest::StatusCode;

/// Failure while querying or parsing a link source.
///
/// Recovered by the orchestrator: the failing provider contributes an empty
/// candidate list and a warning log line, nothing more.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// Failure while downloading or persisting a single image.
///
/// Terminal for that URL within its invocation; never retried and never
/// propagated past the download worker.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("not an image: content-type {0:?}")]
    ContentType(String),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a downloaded image failed validation.
///
/// A rejection is a normal outcome, not an error; it triggers deletion of the
/// downloaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("capture year {found} does not match the target year")]
    YearMismatch { found: i32 },

    #[error("file too small: {size} bytes")]
    TooSmall { size: u64 },
}
