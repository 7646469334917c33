//! Harvest report: the final result set and per-URL accounting.

use super::{outcome::UrlOutcome, result_set::ResultSet};
use crate::core::error::{FailureKind, FetchError};
use std::collections::BTreeMap;

/// A URL that contributed nothing because of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFailure {
    pub url: String,
    pub error: FetchError,
}

/// Result of a completed harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    pub results: ResultSet,
    attempted: usize,
    failures: Vec<UrlFailure>,
}

impl HarvestReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one completed URL, merging its discoveries
    pub fn record(&mut self, outcome: UrlOutcome) {
        self.attempted += 1;
        match outcome.error {
            Some(error) => self.failures.push(UrlFailure {
                url: outcome.url,
                error,
            }),
            None => {
                if !outcome.discovered.is_empty() {
                    self.results.merge(outcome.discovered);
                }
            }
        }
    }

    /// Distinct strings across all URLs
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[UrlFailure] {
        &self.failures
    }

    pub fn failures_by_kind(&self) -> BTreeMap<FailureKind, usize> {
        let mut counts = BTreeMap::new();
        for failure in &self.failures {
            *counts.entry(failure.error.kind()).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_results(self) -> ResultSet {
        self.results
    }
}
