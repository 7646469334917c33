//! JSON fetcher port
//!
//! Defines the interface for retrieving one JSON document over HTTP.

use async_trait::async_trait;
use harvest_domain::FetchError;
use serde_json::Value;

/// Fetches and decodes one JSON document
///
/// An implementation owns the shared connection context (pooled client,
/// timeouts) and is used concurrently by every task of a run, so it must be
/// `Send + Sync`. Adapters live in the infrastructure layer.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Issue exactly one GET for `url` and decode the body.
    ///
    /// Fails with [`FetchError::Transport`], [`FetchError::Status`] (the body
    /// is not decoded) or [`FetchError::Decode`]. The decoded value is
    /// returned as-is, without schema validation.
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}
