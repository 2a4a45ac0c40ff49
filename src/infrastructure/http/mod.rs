//! HTTP-facing implementations of the domain traits.
//!
//! # Modules
//!
//! - [`commons_provider`] - Wikimedia Commons API link provider
//! - [`bing_provider`] - Bing image search scrape link provider
//! - [`image_fetcher`] - reqwest-backed download worker

pub mod bing_provider;
pub mod commons_provider;
pub mod image_fetcher;

pub use bing_provider::BingImagesProvider;
pub use commons_provider::CommonsProvider;
pub use image_fetcher::HttpImageFetcher;

use std::time::Duration;

/// Browser-like User-Agent sent on every outbound request; several image
/// hosts refuse default client strings.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builds the shared HTTP client used by providers and the fetcher: custom
/// User-Agent and a per-request timeout of `timeout_secs`.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}
