//! reqwest-backed download worker.

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::domain::entities::{DownloadOutcome, Period};
use crate::domain::providers::ImageFetcher;
use crate::error::FetchError;
use crate::infrastructure::media::{normalize_timestamp, validate_image};

/// Download worker that fetches one URL, persists it, validates it, and
/// normalizes its timestamp.
///
/// The request timeout and User-Agent are carried by the injected client
/// (see [`crate::infrastructure::http::build_http_client`]).
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher over the given HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns the body bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on network failure, non-2xx status, or a
    /// content-type that does not contain "image". No file is written in any
    /// of these cases.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("image") {
            return Err(FetchError::ContentType(content_type));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn download(
        &self,
        url: &str,
        dir: &Path,
        filename: &str,
        period: &Period,
    ) -> DownloadOutcome {
        let bytes = match self.fetch_image(url).await {
            Ok(bytes) => bytes,
            Err(error) => return DownloadOutcome::Fetch(error),
        };

        let path = dir.join(filename);
        if let Err(error) = tokio::fs::write(&path, &bytes).await {
            return DownloadOutcome::Fetch(FetchError::Io(error));
        }

        match validate_image(&path, period.year) {
            Ok(()) => {
                // Best-effort; the download already counts as saved.
                normalize_timestamp(&path, period.year, period.month_index);
                DownloadOutcome::Saved
            }
            Err(reason) => {
                if let Err(error) = tokio::fs::remove_file(&path).await {
                    debug!(path = %path.display(), %error, "failed to delete rejected file");
                }
                DownloadOutcome::Rejected(reason)
            }
        }
    }
}
