//! Wikimedia Commons link provider.
//!
//! Uses the MediaWiki API: a `list=search` query over the File namespace for
//! `"{month} {year}"`, followed by one `prop=imageinfo` lookup per hit to
//! resolve the direct file URL.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::Period;
use crate::domain::providers::LinkProvider;
use crate::error::ProviderError;

const BASE_URL: &str = "https://commons.wikimedia.org/w/api.php";

/// File namespace; restricts search hits to media pages.
const FILE_NAMESPACE: &str = "6";

/// Link provider backed by the Wikimedia Commons API.
pub struct CommonsProvider {
    client: reqwest::Client,
    base_url: String,
}

impl CommonsProvider {
    /// Creates a provider against the production Commons endpoint.
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

    /// Resolves a `File:` page title to its direct image URL via
    /// `prop=imageinfo`.
    async fn resolve_image_url(&self, title: &str) -> Result<Option<String>, ProviderError> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("prop", "imageinfo"),
            ("titles", title),
            ("iiprop", "url"),
        ];

        let response: ImageInfoResponse = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let url = response
            .query
            .map(|q| q.pages)
            .unwrap_or_default()
            .into_values()
            .filter_map(|page| page.imageinfo?.into_iter().next()?.url)
            .next();

        Ok(url)
    }
}

#[async_trait]
impl LinkProvider for CommonsProvider {
    fn name(&self) -> &'static str {
        "commons"
    }

    async fn fetch_links(
        &self,
        period: &Period,
        limit: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let search_term = format!("\"{} {}\"", period.month_name, period.year);
        let limit_str = limit.to_string();
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("list", "search"),
            ("srsearch", search_term.as_str()),
            ("srlimit", &limit_str),
            ("srnamespace", FILE_NAMESPACE),
        ];

        let response: SearchResponse = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let hits = response.query.map(|q| q.search).unwrap_or_default();

        // A failed lookup for one title keeps the links resolved so far;
        // a partial list from a flaky source is still usable.
        let mut links = Vec::new();
        for hit in &hits {
            match self.resolve_image_url(&hit.title).await {
                Ok(Some(url)) => links.push(url),
                Ok(None) => {}
                Err(error) => {
                    debug!(title = %hit.title, %error, "imageinfo lookup failed");
                }
            }
        }

        Ok(links)
    }
}

// MediaWiki API response shapes, limited to the fields consumed here.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ImageInfoResponse {
    query: Option<ImageInfoQuery>,
}

#[derive(Debug, Deserialize)]
struct ImageInfoQuery {
    #[serde(default)]
    pages: HashMap<String, ImagePage>,
}

#[derive(Debug, Deserialize)]
struct ImagePage {
    imageinfo: Option<Vec<ImageInfo>>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "query": {
                "search": [
                    { "title": "File:Parade June 2015.jpg", "pageid": 1 },
                    { "title": "File:Festival.png", "pageid": 2 }
                ]
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hits = response.query.unwrap().search;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "File:Parade June 2015.jpg");
    }

    #[test]
    fn test_imageinfo_response_parsing() {
        let json = r#"{
            "query": {
                "pages": {
                    "123": {
                        "imageinfo": [
                            { "url": "https://upload.wikimedia.org/a.jpg" }
                        ]
                    }
                }
            }
        }"#;

        let response: ImageInfoResponse = serde_json::from_str(json).unwrap();
        let url = response
            .query
            .unwrap()
            .pages
            .into_values()
            .filter_map(|p| p.imageinfo?.into_iter().next()?.url)
            .next();
        assert_eq!(url.as_deref(), Some("https://upload.wikimedia.org/a.jpg"));
    }

    #[test]
    fn test_empty_query_yields_no_hits() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.query.is_none());
    }
}
