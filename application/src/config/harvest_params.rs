//! Harvest parameters — fan-out control.
//!
//! [`HarvestParams`] groups the static parameters of a run of
//! [`HarvestUseCase`](crate::use_cases::harvest::HarvestUseCase).
//! Transport settings (timeouts, user agent) belong to the fetcher, not here.

/// Fan-out control parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestParams {
    /// Maximum number of URLs in flight at once. `None` schedules every URL
    /// immediately.
    pub max_concurrency: Option<usize>,
}

impl HarvestParams {
    // ==================== Builder Methods ====================

    pub fn with_max_concurrency(mut self, max: Option<usize>) -> Self {
        self.max_concurrency = max;
        self
    }
}
