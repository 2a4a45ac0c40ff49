//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the run
//! starts. Every variable has a documented default; an unset environment is
//! a valid deployment.
//!
//! ## Variables
//!
//! - `DATASET_ROOT` - Root directory for the dataset tree (default: `datasets`)
//! - `QUOTA_PER_PERIOD` - Target validated downloads per period (default: 100)
//! - `DOWNLOAD_CONCURRENCY` - Simultaneous in-flight downloads (default: 10)
//! - `PER_PROVIDER_LIMIT` - Soft result limit per link provider (default: 60)
//! - `START_YEAR` / `END_YEAR` - Inclusive year range (defaults: 2010 / 2025)
//! - `FETCH_TIMEOUT_SECS` - Per-request download timeout (default: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Pipeline configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the dataset tree; files land at
    /// `{dataset_root}/{year}/{month_name}/img_{index}.jpg`.
    pub dataset_root: PathBuf,
    /// Target count of successfully validated downloads per period.
    pub quota_per_period: usize,
    /// Size of the bounded worker pool per period run.
    pub download_concurrency: usize,
    /// Soft upper bound on results requested from each link provider.
    pub per_provider_limit: usize,
    pub start_year: i32,
    pub end_year: i32,
    /// Per-request timeout for image downloads, in seconds.
    pub fetch_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            dataset_root: PathBuf::from(
                env::var("DATASET_ROOT").unwrap_or_else(|_| "datasets".to_string()),
            ),
            quota_per_period: parse_or("QUOTA_PER_PERIOD", 100),
            download_concurrency: parse_or("DOWNLOAD_CONCURRENCY", 10),
            per_provider_limit: parse_or("PER_PROVIDER_LIMIT", 60),
            start_year: parse_or("START_YEAR", 2010),
            end_year: parse_or("END_YEAR", 2025),
            fetch_timeout_secs: parse_or("FETCH_TIMEOUT_SECS", 10),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `quota_per_period` or `per_provider_limit` is zero
    /// - `download_concurrency` is outside `1..=256`
    /// - the year range is inverted
    /// - `fetch_timeout_secs` is zero
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.quota_per_period == 0 {
            anyhow::bail!("QUOTA_PER_PERIOD must be at least 1");
        }

        if self.download_concurrency == 0 || self.download_concurrency > 256 {
            anyhow::bail!(
                "DOWNLOAD_CONCURRENCY must be between 1 and 256, got {}",
                self.download_concurrency
            );
        }

        if self.per_provider_limit == 0 {
            anyhow::bail!("PER_PROVIDER_LIMIT must be at least 1");
        }

        if self.start_year > self.end_year {
            anyhow::bail!(
                "START_YEAR ({}) must not be after END_YEAR ({})",
                self.start_year,
                self.end_year
            );
        }

        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Dataset root: {}", self.dataset_root.display());
        tracing::info!("  Years: {}-{}", self.start_year, self.end_year);
        tracing::info!("  Quota per period: {}", self.quota_per_period);
        tracing::info!("  Download concurrency: {}", self.download_concurrency);
        tracing::info!("  Per-provider limit: {}", self.per_provider_limit);
        tracing::info!("  Fetch timeout: {}s", self.fetch_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
