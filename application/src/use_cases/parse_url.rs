//! Parse URL use case
//!
//! The per-URL error isolation boundary: fetch one URL, extract the strings
//! it lists, and turn every failure into an empty outcome plus a log line.

use crate::ports::json_fetcher::JsonFetcher;
use futures::FutureExt;
use harvest_domain::{FetchError, UrlOutcome, extract_strings};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error};

/// Fetch `url` and collect the strings it lists. Never fails.
///
/// Transport, status, decode and shape failures are logged at error level
/// with the URL, the failure kind and the status code when there is one.
/// A panic inside the fetcher is caught and reported as
/// [`FetchError::Unclassified`].
pub async fn parse_url<F>(fetcher: &F, url: &str) -> UrlOutcome
where
    F: JsonFetcher + ?Sized,
{
    debug!("Fetching {}", url);

    let result = match AssertUnwindSafe(fetcher.fetch(url)).catch_unwind().await {
        Ok(fetched) => fetched.and_then(extract_strings),
        Err(panic) => Err(FetchError::Unclassified(panic_message(panic.as_ref()))),
    };

    match result {
        Ok(found) => UrlOutcome::success(url, found),
        Err(e) => {
            error!(
                kind = %e.kind(),
                status = ?e.status_code(),
                "Fetch failed for {} [{}]: {}",
                url,
                e.status_code()
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| e.kind().to_string()),
                e.message()
            );
            UrlOutcome::failure(url, e)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("fetcher panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("fetcher panicked: {}", s)
    } else {
        "fetcher panicked".to_string()
    }
}
