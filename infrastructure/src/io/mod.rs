//! File collaborators: the newline-delimited URL list and the result file.

pub mod result_file;
pub mod url_file;
