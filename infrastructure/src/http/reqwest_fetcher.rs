//! reqwest-backed JSON fetcher

use crate::config::FileHttpConfig;
use async_trait::async_trait;
use harvest_application::JsonFetcher;
use harvest_domain::FetchError;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failure to set up the shared HTTP client. Aborts the run.
#[derive(Error, Debug)]
pub enum FetcherBuildError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// [`JsonFetcher`] over one pooled `reqwest::Client`
///
/// The client is the run's connection context: cloning it shares the pool,
/// and every concurrent fetch goes through it.
#[derive(Debug, Clone)]
pub struct ReqwestJsonFetcher {
    client: reqwest::Client,
}

impl ReqwestJsonFetcher {
    /// Build the shared client from the `[http]` configuration
    pub fn from_config(config: &FileHttpConfig) -> Result<Self, FetcherBuildError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(max_idle) = config.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }

        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JsonFetcher for ReqwestJsonFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            FetchError::Transport(format!("Failed to read response body: {}", describe(&e)))
        })?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn describe(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("request timed out: {}", error)
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else if error.is_builder() {
        format!("invalid request: {}", error)
    } else {
        error.to_string()
    }
}
