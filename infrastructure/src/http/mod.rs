//! HTTP adapters
//!
//! [`ReqwestJsonFetcher`] implements the
//! [`JsonFetcher`](harvest_application::JsonFetcher) port on top of one
//! pooled `reqwest::Client`.

mod reqwest_fetcher;

pub use reqwest_fetcher::{FetcherBuildError, ReqwestJsonFetcher};
