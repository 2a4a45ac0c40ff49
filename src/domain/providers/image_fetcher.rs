//! Trait for the per-URL download worker.

use std::path::Path;

use crate::domain::entities::{DownloadOutcome, Period};
use async_trait::async_trait;

/// Downloads one candidate URL into the period's dataset directory.
///
/// One invocation covers the whole per-URL lifecycle: fetch, content-type
/// check, persistence, validation, timestamp normalization, and cleanup on
/// rejection. The outcome is always a value, never a propagated error; a
/// failed fetch is terminal for that URL within this invocation.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpImageFetcher`] - reqwest-backed fetcher
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetches `url` and persists it as `dir/filename` if it passes
    /// validation for `period`.
    ///
    /// Guarantees:
    ///
    /// - On a fetch failure, no file is left at the destination path.
    /// - On a validation rejection, the written file has been deleted.
    /// - On success, the file persists with its modification time rewritten
    ///   to noon on the first day of the period.
    async fn download(
        &self,
        url: &str,
        dir: &Path,
        filename: &str,
        period: &Period,
    ) -> DownloadOutcome;
}
