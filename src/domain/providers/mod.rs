//! Trait definitions for the pipeline's external collaborators.
//!
//! These traits abstract everything that touches the network or the
//! filesystem so that orchestration logic can be tested against mocks.
//!
//! # Architecture
//!
//! - Traits define the contract for link discovery and image download
//! - Implementations live in `crate::infrastructure::http`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Traits
//!
//! - [`LinkProvider`] - Candidate URL discovery for a period
//! - [`ImageFetcher`] - Per-URL download, validate, and persist worker

pub mod image_fetcher;
pub mod link_provider;

pub use image_fetcher::ImageFetcher;
pub use link_provider::LinkProvider;

#[cfg(test)]
pub use image_fetcher::MockImageFetcher;
#[cfg(test)]
pub use link_provider::MockLinkProvider;
