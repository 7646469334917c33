//! Application layer for image-harvest
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::HarvestParams;
pub use ports::{
    json_fetcher::JsonFetcher,
    progress::{HarvestProgress, NoProgress},
};
pub use use_cases::harvest::{HarvestError, HarvestInput, HarvestUseCase};
pub use use_cases::parse_url::parse_url;
