//! # Photo Harvester
//!
//! A historical photo dataset builder: queries multiple web sources for each
//! (year, month) period, deduplicates the candidate links, downloads them
//! concurrently under a bounded worker pool, validates each image against
//! temporal and size criteria, and stops once a per-period quota is reached.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Periods, outcomes, and collaborator traits
//! - **Application Layer** ([`application`]) - Aggregation, orchestration, and the run driver
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP providers, the download worker, and media handling
//!
//! ## Pipeline
//!
//! For one period:
//!
//! 1. Each [`domain::providers::LinkProvider`] is queried for candidate URLs;
//!    a failing provider contributes an empty list.
//! 2. Candidates are merged and deduplicated by exact URL equality.
//! 3. One download task per candidate runs on a pool bounded to the
//!    configured concurrency; each task fetches, validates, and either keeps
//!    or deletes its file.
//! 4. Successes are counted until the quota is met, then collection stops.
//!
//! There is no fatal error path in the core: a period degrades to zero
//! results rather than aborting, and the next period runs regardless.
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional; defaults harvest 2010-2025 into ./datasets
//! export QUOTA_PER_PERIOD=100
//! export DOWNLOAD_CONCURRENCY=10
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See [`config`]
//! for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Harvester, aggregate_links, run_all_periods};
    pub use crate::config::Config;
    pub use crate::domain::entities::{DownloadOutcome, Period, RunSummary};
    pub use crate::domain::providers::{ImageFetcher, LinkProvider};
    pub use crate::error::{FetchError, ProviderError, RejectReason};
    pub use crate::infrastructure::http::{
        BingImagesProvider, CommonsProvider, HttpImageFetcher, build_http_client,
    };
}
