//! Core domain entities representing the pipeline data model.
//!
//! Plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Period`] - A (year, month) unit of work
//! - [`RunSummary`] - Per-period result of one orchestrator run
//! - [`DownloadOutcome`] - Per-URL result of one download worker invocation

pub mod outcome;
pub mod period;

pub use outcome::DownloadOutcome;
pub use period::{MONTH_NAMES, Period, RunSummary};
