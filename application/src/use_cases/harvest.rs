//! Harvest use case
//!
//! Fans one [`parse_url`] task out per URL over a shared [`JsonFetcher`],
//! waits for every task, and unions the discoveries into the run's
//! [`ResultSet`](harvest_domain::ResultSet).

use crate::config::HarvestParams;
use crate::ports::json_fetcher::JsonFetcher;
use crate::ports::progress::{HarvestProgress, NoProgress};
use crate::use_cases::parse_url::parse_url;
use harvest_domain::{FetchError, HarvestReport, UrlOutcome, UrlSet};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that prevent a harvest run from starting.
///
/// Per-URL failures are never reported here; they end up in the
/// [`HarvestReport`].
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("max_concurrency must be at least 1")]
    InvalidConcurrency,
}

/// Input for the Harvest use case
#[derive(Debug, Clone)]
pub struct HarvestInput {
    pub urls: UrlSet,
    pub params: HarvestParams,
}

impl HarvestInput {
    pub fn new(urls: UrlSet) -> Self {
        Self {
            urls,
            params: HarvestParams::default(),
        }
    }

    pub fn with_params(mut self, params: HarvestParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for harvesting strings from a set of JSON endpoints
///
/// The fetcher is the run's connection context: one instance is shared by
/// every task and released when the last task and the use case drop it.
pub struct HarvestUseCase<F: JsonFetcher + 'static> {
    fetcher: Arc<F>,
}

impl<F: JsonFetcher + 'static> HarvestUseCase<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: HarvestInput) -> Result<HarvestReport, HarvestError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: HarvestInput,
        progress: &dyn HarvestProgress,
    ) -> Result<HarvestReport, HarvestError> {
        let limiter = match input.params.max_concurrency {
            Some(0) => return Err(HarvestError::InvalidConcurrency),
            Some(max) => Some(Arc::new(Semaphore::new(max))),
            None => None,
        };

        let total = input.urls.len();
        info!(
            "Starting harvest of {} URLs (max concurrency: {})",
            total,
            input
                .params
                .max_concurrency
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unbounded".to_string())
        );
        progress.on_start(total);

        let mut pending: HashSet<String> = HashSet::with_capacity(total);
        let mut join_set = JoinSet::new();

        for url in input.urls {
            pending.insert(url.clone());
            let fetcher = Arc::clone(&self.fetcher);
            let limiter = limiter.clone();

            join_set.spawn(async move {
                let _permit = match limiter {
                    Some(semaphore) => match semaphore.acquire_owned().await {
                        Ok(permit) => Some(permit),
                        Err(e) => {
                            return UrlOutcome::failure(
                                url,
                                FetchError::Unclassified(format!("concurrency limiter: {}", e)),
                            );
                        }
                    },
                    None => None,
                };
                parse_url(fetcher.as_ref(), &url).await
            });
        }

        let mut report = HarvestReport::new();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(outcome) => {
                    pending.remove(&outcome.url);
                    self.complete(&mut report, outcome, progress);
                }
                Err(e) => {
                    warn!("Harvest task join error: {}", e);
                }
            }
        }

        // A task that died outside the isolation boundary still counts as attempted
        for url in pending {
            let outcome = UrlOutcome::failure(
                url,
                FetchError::Unclassified("task terminated before reporting".to_string()),
            );
            self.complete(&mut report, outcome, progress);
        }

        info!("Total number of image urls: {}", report.total());
        debug!(
            "Harvest finished: {} attempted, {} succeeded, {} failed",
            report.attempted(),
            report.succeeded(),
            report.failed()
        );
        progress.on_finish(&report);

        Ok(report)
    }

    fn complete(
        &self,
        report: &mut HarvestReport,
        outcome: UrlOutcome,
        progress: &dyn HarvestProgress,
    ) {
        info!("Url: {} | Number of image urls: {}", outcome.url, outcome.count());
        progress.on_url_complete(&outcome);
        report.record(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{Scripted, ScriptedFetcher};
    use harvest_domain::FailureKind;
    use serde_json::json;
    use std::sync::Mutex;
    use std::time::Duration;

    fn urls(items: &[&str]) -> UrlSet {
        items.iter().copied().collect()
    }

    /// Progress notifier that records every callback
    #[derive(Default)]
    struct RecordingProgress {
        started: Mutex<Option<usize>>,
        completed: Mutex<Vec<(String, usize)>>,
        finished: Mutex<Option<usize>>,
    }

    impl HarvestProgress for RecordingProgress {
        fn on_start(&self, total_urls: usize) {
            *self.started.lock().unwrap() = Some(total_urls);
        }

        fn on_url_complete(&self, outcome: &UrlOutcome) {
            self.completed
                .lock()
                .unwrap()
                .push((outcome.url.clone(), outcome.count()));
        }

        fn on_finish(&self, report: &HarvestReport) {
            *self.finished.lock().unwrap() = Some(report.total());
        }
    }

    #[tokio::test]
    async fn test_failed_url_does_not_affect_others() {
        let fetcher = ScriptedFetcher::new()
            .with("http://a", Scripted::json(json!(["x.png", "y.png"])))
            .with(
                "http://b",
                Scripted::fail(FetchError::status(500, "Internal Server Error")),
            );
        let use_case = HarvestUseCase::new(Arc::new(fetcher));

        let report = use_case
            .execute(HarvestInput::new(urls(&["http://a", "http://b"])))
            .await
            .unwrap();

        assert_eq!(report.total(), 2);
        assert!(report.results.contains("x.png"));
        assert!(report.results.contains("y.png"));
        assert_eq!(report.attempted(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures()[0].url, "http://b");
        assert_eq!(report.failures()[0].error.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_duplicates_across_urls_appear_once() {
        let fetcher = ScriptedFetcher::new()
            .with("http://a", Scripted::json(json!(["x.png"])))
            .with("http://b", Scripted::json(json!(["x.png", "z.png"])));
        let use_case = HarvestUseCase::new(Arc::new(fetcher));

        let report = use_case
            .execute(HarvestInput::new(urls(&["http://a", "http://b"])))
            .await
            .unwrap();

        assert_eq!(report.results.sorted(), vec!["x.png", "z.png"]);
    }

    #[tokio::test]
    async fn test_empty_input_completes_immediately() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        let use_case = HarvestUseCase::new(Arc::clone(&fetcher));
        let progress = RecordingProgress::default();

        let report = use_case
            .execute_with_progress(HarvestInput::new(UrlSet::new()), &progress)
            .await
            .unwrap();

        assert_eq!(report.total(), 0);
        assert_eq!(report.attempted(), 0);
        assert!(fetcher.calls().is_empty());
        assert_eq!(*progress.started.lock().unwrap(), Some(0));
        assert_eq!(*progress.finished.lock().unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_every_url_attempted_exactly_once_when_all_fail() {
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .with("http://decode", Scripted::fail(FetchError::Decode("eof".into())))
                .with("http://shape", Scripted::json(json!({"images": []})))
                .with("http://panic", Scripted::Panic),
        );
        let use_case = HarvestUseCase::new(Arc::clone(&fetcher));
        let input = urls(&["http://decode", "http://shape", "http://panic", "http://down"]);

        let report = use_case.execute(HarvestInput::new(input)).await.unwrap();

        assert_eq!(report.attempted(), 4);
        assert_eq!(report.failed(), 4);
        assert!(report.results.is_empty());

        let mut calls = fetcher.calls();
        calls.sort();
        assert_eq!(
            calls,
            vec!["http://decode", "http://down", "http://panic", "http://shape"]
        );

        let by_kind = report.failures_by_kind();
        assert_eq!(by_kind.get(&FailureKind::Decode), Some(&1));
        assert_eq!(by_kind.get(&FailureKind::Shape), Some(&1));
        assert_eq!(by_kind.get(&FailureKind::Unclassified), Some(&1));
        assert_eq!(by_kind.get(&FailureKind::Transport), Some(&1));
    }

    #[tokio::test]
    async fn test_progress_reports_each_url_count() {
        let fetcher = ScriptedFetcher::new()
            .with("http://a", Scripted::json(json!(["x.png", "y.png"])))
            .with("http://b", Scripted::fail(FetchError::status(404, "Not Found")));
        let use_case = HarvestUseCase::new(Arc::new(fetcher));
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress(HarvestInput::new(urls(&["http://a", "http://b"])), &progress)
            .await
            .unwrap();

        let mut completed = progress.completed.lock().unwrap().clone();
        completed.sort();
        assert_eq!(
            completed,
            vec![("http://a".to_string(), 2), ("http://b".to_string(), 0)]
        );
        assert_eq!(*progress.started.lock().unwrap(), Some(2));
        assert_eq!(*progress.finished.lock().unwrap(), Some(2));
    }

    /// Fetcher where each of `n` URLs answers after a short delay
    fn delayed_fetcher(n: usize) -> (Arc<ScriptedFetcher>, UrlSet) {
        let mut fetcher = ScriptedFetcher::new();
        let mut all = Vec::new();
        for i in 0..n {
            let url = format!("http://host/{}", i);
            fetcher = fetcher.with(
                &url,
                Scripted::delayed(json!([format!("{}.png", i)]), Duration::from_millis(20)),
            );
            all.push(url);
        }
        (Arc::new(fetcher), all.into_iter().collect())
    }

    #[tokio::test]
    async fn test_max_concurrency_bounds_in_flight_requests() {
        let (fetcher, all) = delayed_fetcher(8);
        let use_case = HarvestUseCase::new(Arc::clone(&fetcher));
        let input = HarvestInput::new(all)
            .with_params(HarvestParams::default().with_max_concurrency(Some(2)));

        let report = use_case.execute(input).await.unwrap();

        assert_eq!(report.total(), 8);
        assert!(fetcher.peak_in_flight() <= 2);
    }

    #[tokio::test]
    async fn test_unbounded_schedules_every_url_at_once() {
        let (fetcher, all) = delayed_fetcher(8);
        let use_case = HarvestUseCase::new(Arc::clone(&fetcher));

        let report = use_case.execute(HarvestInput::new(all)).await.unwrap();

        assert_eq!(report.total(), 8);
        assert_eq!(fetcher.peak_in_flight(), 8);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_rejected() {
        let use_case = HarvestUseCase::new(Arc::new(ScriptedFetcher::new()));
        let input = HarvestInput::new(urls(&["http://a"]))
            .with_params(HarvestParams::default().with_max_concurrency(Some(0)));

        let result = use_case.execute(input).await;
        assert!(matches!(result, Err(HarvestError::InvalidConcurrency)));
    }

    #[tokio::test]
    async fn test_same_input_same_result() {
        let fetcher = ScriptedFetcher::new()
            .with("http://a", Scripted::json(json!(["x.png", "y.png"])))
            .with("http://b", Scripted::json(json!(["y.png", "z.png"])));
        let use_case = HarvestUseCase::new(Arc::new(fetcher));
        let input = HarvestInput::new(urls(&["http://a", "http://b"]));

        let first = use_case.execute(input.clone()).await.unwrap();
        let second = use_case.execute(input).await.unwrap();

        assert_eq!(first.results, second.results);
        assert_eq!(first.total(), 3);
    }
}
