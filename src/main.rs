use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use photo_harvester::application::services::{Harvester, run_all_periods};
use photo_harvester::config::{self, Config};
use photo_harvester::domain::providers::LinkProvider;
use photo_harvester::infrastructure::http::{
    BingImagesProvider, CommonsProvider, HttpImageFetcher, build_http_client,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let client = build_http_client(config.fetch_timeout_secs)?;

    let providers: Vec<Arc<dyn LinkProvider>> = vec![
        Arc::new(CommonsProvider::new(client.clone())),
        Arc::new(BingImagesProvider::new(client.clone())),
    ];
    let fetcher = Arc::new(HttpImageFetcher::new(client));

    let harvester = Harvester::new(providers, fetcher, &config);
    let summaries = run_all_periods(&harvester, config.start_year..=config.end_year).await;

    let total: usize = summaries.iter().map(|s| s.success_count).sum();
    tracing::info!(periods = summaries.len(), total, "harvest run complete");

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
