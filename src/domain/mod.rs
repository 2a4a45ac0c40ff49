//! Domain layer containing pipeline entities and collaborator traits.
//!
//! # Architecture
//!
//! - [`entities`] - Periods, outcomes, and run summaries
//! - [`providers`] - Traits for link sources and the download worker
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure concerns
//! - Traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod providers;
