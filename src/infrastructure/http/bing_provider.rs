//! Bing image search link provider.
//!
//! No structured API: fetches the rendered image-search results page and
//! extracts direct image URLs from the embedded `murl` marker entries.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::domain::entities::Period;
use crate::domain::providers::LinkProvider;
use crate::error::ProviderError;

const BASE_URL: &str = "https://www.bing.com";

/// Direct image URLs are embedded in the page as
/// `murl&quot;:&quot;http...&quot;` entries.
static MURL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"murl&quot;:&quot;(http.*?)&quot;").unwrap());

/// Link provider that scrapes Bing image search results.
pub struct BingImagesProvider {
    client: reqwest::Client,
    base_url: String,
}

impl BingImagesProvider {
    /// Creates a provider against the production Bing endpoint.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a provider against a custom endpoint. Test seam.
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Extracts up to `limit` image URLs from a results page.
    fn extract_links(html: &str, limit: usize) -> Vec<String> {
        MURL_PATTERN
            .captures_iter(html)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
            .take(limit)
            .collect()
    }
}

#[async_trait]
impl LinkProvider for BingImagesProvider {
    fn name(&self) -> &'static str {
        "bing"
    }

    async fn fetch_links(
        &self,
        period: &Period,
        limit: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let url = format!(
            "{}/images/search?q={}+{}+photography",
            self.base_url, period.month_name, period.year
        );

        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(Self::extract_links(&html, limit))
    }
}
