//! Per-URL outcome value object

use crate::core::error::FetchError;
use std::collections::HashSet;

/// What one URL contributed to a run
///
/// A failed URL is an empty outcome carrying its error; it is never
/// absent and never an `Err` at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOutcome {
    pub url: String,
    pub discovered: HashSet<String>,
    pub error: Option<FetchError>,
}

impl UrlOutcome {
    pub fn success(url: impl Into<String>, discovered: HashSet<String>) -> Self {
        Self {
            url: url.into(),
            discovered,
            error: None,
        }
    }

    pub fn failure(url: impl Into<String>, error: FetchError) -> Self {
        Self {
            url: url.into(),
            discovered: HashSet::new(),
            error: Some(error),
        }
    }

    /// Number of distinct strings discovered at this URL
    pub fn count(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
