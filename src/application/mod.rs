//! Application layer orchestrating the acquisition pipeline.
//!
//! This layer composes domain traits into the actual pipeline: link
//! aggregation, per-period orchestration with a bounded worker pool, and the
//! sequential run driver.
//!
//! # Available Services
//!
//! - [`services::aggregator::aggregate_links`] - Candidate merge and dedup
//! - [`services::harvester::Harvester`] - Per-period pipeline orchestrator
//! - [`services::driver::run_all_periods`] - Sequential period iteration

pub mod services;
