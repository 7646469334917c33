//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters implement.

pub mod json_fetcher;
pub mod progress;
