//! Trait for candidate link sources.

use crate::domain::entities::Period;
use crate::error::ProviderError;
use async_trait::async_trait;

/// A source of candidate image URLs for a time period.
///
/// Implementations differ in query construction and response parsing
/// (structured API vs. pattern extraction from a rendered page) but share the
/// same contract: given a period and a soft result limit, return a list of
/// URLs that may point to images from that period.
///
/// Errors are data to the caller. The orchestrator treats a failing provider
/// as contributing zero candidates and keeps going, so a broken source never
/// takes a period down with it.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::CommonsProvider`] - Wikimedia Commons API
/// - [`crate::infrastructure::http::BingImagesProvider`] - Bing image search scrape
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkProvider: Send + Sync {
    /// Short name used in log lines, e.g. "commons".
    fn name(&self) -> &'static str;

    /// Fetches candidate image URLs for `period`.
    ///
    /// `limit` is a soft upper bound on the number of results requested from
    /// the source, not a guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network or parsing failure. Callers are
    /// expected to recover by substituting an empty list.
    async fn fetch_links(&self, period: &Period, limit: usize)
    -> Result<Vec<String>, ProviderError>;
}
