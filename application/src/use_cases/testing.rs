//! In-memory fetcher used by use case tests.

use crate::ports::json_fetcher::JsonFetcher;
use async_trait::async_trait;
use harvest_domain::FetchError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted response for one URL
#[derive(Clone)]
pub(crate) enum Scripted {
    Json(Value, Duration),
    Fail(FetchError),
    Panic,
}

impl Scripted {
    pub(crate) fn json(value: Value) -> Self {
        Scripted::Json(value, Duration::ZERO)
    }

    pub(crate) fn delayed(value: Value, delay: Duration) -> Self {
        Scripted::Json(value, delay)
    }

    pub(crate) fn fail(error: FetchError) -> Self {
        Scripted::Fail(error)
    }
}

/// Fetcher answering from a fixed script, recording calls and peak concurrency.
/// Unscripted URLs fail with a transport error.
#[derive(Default)]
pub(crate) struct ScriptedFetcher {
    script: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, response: Scripted) -> Self {
        self.script.insert(url.to_string(), response);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JsonFetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let response = self.script.get(url).cloned();
        let result = match response {
            Some(Scripted::Json(value, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(value)
            }
            Some(Scripted::Fail(error)) => Err(error),
            Some(Scripted::Panic) => {
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
                panic!("scripted panic for {}", url);
            }
            None => Err(FetchError::Transport(format!("connection refused: {}", url))),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
