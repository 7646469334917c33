//! Progress reporting

pub mod log_writer;
pub mod reporter;
