//! Infrastructure layer for image-harvest
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the URL/result file collaborators,
//! and configuration file loading.

pub mod config;
pub mod http;
pub mod io;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileHarvestConfig, FileHttpConfig,
    FileInputConfig, FileOutputConfig,
};
pub use http::{FetcherBuildError, ReqwestJsonFetcher};
pub use io::{
    result_file::{ResultFileError, write_result_file},
    url_file::{UrlFileError, parse_url_lines, read_url_file},
};
