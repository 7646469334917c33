//! Progress notification port
//!
//! Defines the interface for reporting progress during a harvest run.

use harvest_domain::{HarvestReport, UrlOutcome};

/// Callback for progress updates during a harvest run
///
/// Implementations live in the presentation layer. Callbacks are invoked
/// from the orchestrating task only, in completion order.
pub trait HarvestProgress: Send + Sync {
    /// Called once before any URL is scheduled
    fn on_start(&self, total_urls: usize);

    /// Called when one URL has been attempted
    fn on_url_complete(&self, outcome: &UrlOutcome);

    /// Called once after every URL has been attempted
    fn on_finish(&self, _report: &HarvestReport) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl HarvestProgress for NoProgress {
    fn on_start(&self, _total_urls: usize) {}
    fn on_url_complete(&self, _outcome: &UrlOutcome) {}
}
