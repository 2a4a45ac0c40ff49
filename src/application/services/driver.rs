//! Sequential run driver over the configured period range.

use tracing::info;

use crate::application::services::Harvester;
use crate::domain::entities::{Period, RunSummary};
use crate::domain::providers::ImageFetcher;

/// Runs the pipeline for every (year, month) period in `years`, one period
/// fully completing before the next begins.
///
/// No state crosses period boundaries; a poor outcome in one period (even
/// zero results) never affects the ones that follow. Summaries are returned
/// in execution order for reporting.
pub async fn run_all_periods<F: ImageFetcher + 'static>(
    harvester: &Harvester<F>,
    years: std::ops::RangeInclusive<i32>,
) -> Vec<RunSummary> {
    let periods: Vec<Period> = Period::all(years).collect();
    info!(periods = periods.len(), "starting harvest run");

    let mut summaries = Vec::with_capacity(periods.len());
    for period in periods {
        summaries.push(harvester.run_period(&period).await);
    }

    summaries
}
