//! Domain layer for image-harvest
//!
//! This crate contains the value objects and entities of a harvest run.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Harvest
//!
//! A harvest run fetches every URL of a [`UrlSet`] once, expects each
//! response body to be a JSON array of strings (image URLs), and unions
//! everything it finds into a single deduplicated [`ResultSet`].
//!
//! - **Outcome**: what one URL produced, possibly empty with a [`FetchError`]
//! - **Report**: the final result set plus per-URL accounting

pub mod core;
pub mod harvest;

// Re-export commonly used types
pub use core::{
    error::{FailureKind, FetchError},
    url_set::UrlSet,
};
pub use harvest::{
    outcome::UrlOutcome,
    payload::extract_strings,
    report::{HarvestReport, UrlFailure},
    result_set::ResultSet,
};
