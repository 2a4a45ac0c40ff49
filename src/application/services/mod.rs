//! Pipeline services for the application layer.

pub mod aggregator;
pub mod driver;
pub mod harvester;

pub use aggregator::aggregate_links;
pub use driver::run_all_periods;
pub use harvester::Harvester;
