//! Per-period acquisition pipeline orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::application::services::aggregator::aggregate_links;
use crate::config::Config;
use crate::domain::entities::{DownloadOutcome, Period, RunSummary};
use crate::domain::providers::{ImageFetcher, LinkProvider};

/// Orchestrates the acquisition pipeline for one period at a time.
///
/// For each period the harvester queries every registered link provider,
/// deduplicates the merged candidates, dispatches one download task per
/// candidate onto a worker pool bounded by `concurrency`, and counts
/// successful downloads until the quota is met or the candidates run out.
///
/// # Early Termination
///
/// Reaching the quota stops collecting, not executing: the result loop exits
/// and the remaining in-flight tasks are aborted when the pool is dropped.
/// Results arriving after the stop are discarded and never double-counted,
/// so `success_count` can never overshoot the quota.
///
/// # Failure Semantics
///
/// Nothing in a period run is fatal. A failing provider contributes zero
/// candidates; a failing download is a counted miss. An empty candidate set
/// yields a summary with `success_count = 0`.
pub struct Harvester<F: ImageFetcher + 'static> {
    providers: Vec<Arc<dyn LinkProvider>>,
    fetcher: Arc<F>,
    dataset_root: PathBuf,
    quota: usize,
    concurrency: usize,
    per_provider_limit: usize,
}

impl<F: ImageFetcher + 'static> Harvester<F> {
    /// Creates a harvester over the given link providers and download worker.
    ///
    /// Quota, concurrency, and per-provider limit are taken from `config`.
    pub fn new(providers: Vec<Arc<dyn LinkProvider>>, fetcher: Arc<F>, config: &Config) -> Self {
        Self {
            providers,
            fetcher,
            dataset_root: config.dataset_root.clone(),
            quota: config.quota_per_period,
            concurrency: config.download_concurrency,
            per_provider_limit: config.per_provider_limit,
        }
    }

    /// Runs the full pipeline for one period and returns its summary.
    ///
    /// Steps:
    ///
    /// 1. Ensure `dataset_root/{year}/{month_name}` exists.
    /// 2. Query each provider for up to `per_provider_limit` links; a provider
    ///    error is logged and treated as an empty list.
    /// 3. Aggregate and deduplicate the candidates.
    /// 4. Dispatch bounded concurrent downloads, filenames `img_{i}.jpg` by
    ///    candidate index.
    /// 5. Count successes until the quota is reached, then stop collecting.
    pub async fn run_period(&self, period: &Period) -> RunSummary {
        let dir = self.period_dir(period);

        if let Err(error) = tokio::fs::create_dir_all(&dir).await {
            warn!(%period, %error, "failed to create period directory");
            return self.summary(period, 0);
        }

        let candidates = self.collect_candidates(period).await;
        debug!(%period, candidates = candidates.len(), "candidate set built");

        let success_count = self.download_candidates(period, &dir, candidates).await;

        let summary = self.summary(period, success_count);
        info!(
            "{}: {}/{} photos downloaded (hybrid source)",
            period, summary.success_count, summary.quota
        );
        summary
    }

    /// Queries every provider and merges the results into a deduplicated
    /// candidate list. Provider failures degrade to empty lists here; this is
    /// the one place the ignore-and-continue policy for sources is applied.
    async fn collect_candidates(&self, period: &Period) -> Vec<String> {
        let mut lists = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            match provider.fetch_links(period, self.per_provider_limit).await {
                Ok(links) => {
                    debug!(%period, provider = provider.name(), links = links.len(), "provider returned links");
                    lists.push(links);
                }
                Err(error) => {
                    warn!(%period, provider = provider.name(), %error, "link provider failed");
                    lists.push(Vec::new());
                }
            }
        }

        aggregate_links(lists)
    }

    /// Dispatches one download task per candidate onto a pool bounded by
    /// `concurrency` permits and counts successes until the quota is met.
    async fn download_candidates(
        &self,
        period: &Period,
        dir: &Path,
        candidates: Vec<String>,
    ) -> usize {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for (index, url) in candidates.into_iter().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let fetcher = Arc::clone(&self.fetcher);
            let dir = dir.to_path_buf();
            let filename = format!("img_{index}.jpg");
            let period = *period;

            tasks.spawn(async move {
                // The semaphore lives as long as every task; acquire cannot
                // observe a closed semaphore.
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("download semaphore closed");
                let outcome = fetcher.download(&url, &dir, &filename, &period).await;
                (url, outcome)
            });
        }

        let mut success_count = 0;

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((url, DownloadOutcome::Saved)) => {
                    success_count += 1;
                    debug!(%period, %url, "image saved");
                }
                Ok((url, DownloadOutcome::Fetch(error))) => {
                    debug!(%period, %url, %error, "download failed");
                }
                Ok((url, DownloadOutcome::Rejected(reason))) => {
                    debug!(%period, %url, %reason, "image rejected");
                }
                Err(join_error) => {
                    warn!(%period, %join_error, "download task panicked");
                }
            }

            if success_count >= self.quota {
                break;
            }
        }

        // Dropping the JoinSet aborts any still-running tasks; their results
        // are discarded rather than counted.
        success_count
    }

    fn period_dir(&self, period: &Period) -> PathBuf {
        self.dataset_root
            .join(period.year.to_string())
            .join(period.month_name)
    }

    fn summary(&self, period: &Period, success_count: usize) -> RunSummary {
        RunSummary {
            period: *period,
            success_count,
            quota: self.quota,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::{MockImageFetcher, MockLinkProvider};
    use crate::error::{FetchError, ProviderError, RejectReason};

    fn test_config(root: &Path, quota: usize, concurrency: usize) -> Config {
        Config {
            dataset_root: root.to_path_buf(),
            quota_per_period: quota,
            download_concurrency: concurrency,
            per_provider_limit: 60,
            start_year: 2010,
            end_year: 2025,
            fetch_timeout_secs: 10,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    fn provider_with_links(name: &'static str, links: Vec<&str>) -> Arc<dyn LinkProvider> {
        let links: Vec<String> = links.into_iter().map(|s| s.to_string()).collect();
        let mut provider = MockLinkProvider::new();
        provider.expect_name().return_const(name);
        provider
            .expect_fetch_links()
            .returning(move |_, _| Ok(links.clone()));
        Arc::new(provider)
    }

    fn failing_provider(name: &'static str) -> Arc<dyn LinkProvider> {
        let mut provider = MockLinkProvider::new();
        provider.expect_name().return_const(name);
        provider
            .expect_fetch_links()
            .returning(|_, _| Err(ProviderError::Parse("boom".to_string())));
        Arc::new(provider)
    }

    #[tokio::test]
    async fn test_stops_counting_at_quota() {
        let tmp = tempfile::tempdir().unwrap();
        let urls: Vec<String> = (0..150).map(|i| format!("http://host/{i}.jpg")).collect();
        let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();

        let mut fetcher = MockImageFetcher::new();
        fetcher
            .expect_download()
            .returning(|_, _, _, _| DownloadOutcome::Saved);

        let harvester = Harvester::new(
            vec![provider_with_links("many", url_refs)],
            Arc::new(fetcher),
            &test_config(tmp.path(), 100, 10),
        );

        let summary = harvester.run_period(&Period::new(2015, 6).unwrap()).await;

        assert_eq!(summary.success_count, 100);
        assert_eq!(summary.quota, 100);
    }

    #[tokio::test]
    async fn test_all_downloads_fail_yields_zero() {
        let tmp = tempfile::tempdir().unwrap();

        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_download().returning(|_, _, _, _| {
            DownloadOutcome::Fetch(FetchError::ContentType("text/html".to_string()))
        });

        let harvester = Harvester::new(
            vec![provider_with_links(
                "few",
                vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"],
            )],
            Arc::new(fetcher),
            &test_config(tmp.path(), 100, 10),
        );

        let summary = harvester.run_period(&Period::new(2012, 3).unwrap()).await;

        assert_eq!(summary.success_count, 0);
    }

    #[tokio::test]
    async fn test_candidate_set_smaller_than_quota() {
        let tmp = tempfile::tempdir().unwrap();

        let mut fetcher = MockImageFetcher::new();
        fetcher
            .expect_download()
            .times(3)
            .returning(|_, _, _, _| DownloadOutcome::Saved);

        // Two providers with an overlapping link: 3 unique candidates.
        let harvester = Harvester::new(
            vec![
                provider_with_links("one", vec!["a.jpg", "b.jpg"]),
                provider_with_links("two", vec!["b.jpg", "c.jpg"]),
            ],
            Arc::new(fetcher),
            &test_config(tmp.path(), 100, 10),
        );

        let summary = harvester.run_period(&Period::new(2015, 6).unwrap()).await;

        assert_eq!(summary.success_count, 3);
    }

    #[tokio::test]
    async fn test_all_providers_failing_yields_zero_without_error() {
        let tmp = tempfile::tempdir().unwrap();

        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_download().never();

        let harvester = Harvester::new(
            vec![failing_provider("one"), failing_provider("two")],
            Arc::new(fetcher),
            &test_config(tmp.path(), 100, 10),
        );

        let summary = harvester.run_period(&Period::new(2020, 1).unwrap()).await;

        assert_eq!(summary.success_count, 0);
        assert_eq!(summary.quota, 100);
    }

    #[tokio::test]
    async fn test_rejections_do_not_count() {
        let tmp = tempfile::tempdir().unwrap();

        let mut fetcher = MockImageFetcher::new();
        let calls = std::sync::atomic::AtomicUsize::new(0);
        fetcher.expect_download().returning(move |_, _, _, _| {
            let call = calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if call % 2 == 1 {
                DownloadOutcome::Saved
            } else {
                DownloadOutcome::Rejected(RejectReason::TooSmall { size: 5000 })
            }
        });

        let harvester = Harvester::new(
            vec![provider_with_links(
                "mixed",
                vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg"],
            )],
            Arc::new(fetcher),
            // Concurrency 1 keeps the alternating outcome sequence deterministic.
            &test_config(tmp.path(), 100, 1),
        );

        let summary = harvester.run_period(&Period::new(2018, 9).unwrap()).await;

        assert_eq!(summary.success_count, 2);
    }

    #[tokio::test]
    async fn test_creates_period_directory() {
        let tmp = tempfile::tempdir().unwrap();

        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_download().never();

        let harvester = Harvester::new(
            vec![provider_with_links("empty", vec![])],
            Arc::new(fetcher),
            &test_config(tmp.path(), 100, 10),
        );

        harvester.run_period(&Period::new(2015, 6).unwrap()).await;

        assert!(tmp.path().join("2015").join("June").is_dir());
    }
}
