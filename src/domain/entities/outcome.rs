//! Per-URL download outcome.

use crate::error::{FetchError, RejectReason};

/// The result of one download worker invocation.
///
/// Failures are data, not propagated errors: the orchestrator inspects the
/// outcome, counts `Saved`, and logs the rest. This keeps the
/// ignore-and-continue policy an explicit decision at the call site instead of
/// a swallowed exception.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Image fetched, validated, and kept on disk.
    Saved,
    /// Fetch or persistence failed; no file remains at the destination.
    Fetch(FetchError),
    /// Image fetched but rejected by validation; the file was deleted.
    Rejected(RejectReason),
}

impl DownloadOutcome {
    /// Whether this outcome counts toward the period quota.
    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadOutcome::Saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_saved_counts() {
        assert!(DownloadOutcome::Saved.is_saved());
        assert!(!DownloadOutcome::Rejected(RejectReason::TooSmall { size: 10 }).is_saved());
        assert!(
            !DownloadOutcome::Fetch(FetchError::ContentType("text/html".to_string())).is_saved()
        );
    }
}
