//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain traits plus local media handling.
//!
//! # Modules
//!
//! - [`http`] - Link providers and the download worker over reqwest
//! - [`media`] - EXIF validation and file timestamp normalization

pub mod http;
pub mod media;
