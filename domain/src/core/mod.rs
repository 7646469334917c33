//! Core domain concepts shared across all subdomains.
//!
//! - [`url_set::UrlSet`] — the deduplicated input of a run
//! - [`error::FetchError`] — the tagged per-URL failure

pub mod error;
pub mod url_set;
