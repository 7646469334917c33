//! Result file writer

use harvest_domain::ResultSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ResultFileError {
    #[error("Failed to write result file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write one discovered string per line, sorted, and return how many.
///
/// Parent directories are created. An empty set produces an empty file.
pub async fn write_result_file(
    path: impl AsRef<Path>,
    results: &ResultSet,
) -> Result<usize, ResultFileError> {
    let path = path.as_ref();
    let wrap = |source| ResultFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(wrap)?;
    }

    let mut content = String::new();
    for item in results.sorted() {
        content.push_str(item);
        content.push('\n');
    }
    tokio::fs::write(path, content).await.map_err(wrap)?;

    debug!("Wrote {} lines to {}", results.len(), path.display());
    Ok(results.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_one_item_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("resulturls");
        let mut results = ResultSet::new();
        results.merge(["y.png", "x.png"]);

        let written = write_result_file(&path, &results).await.unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x.png\ny.png\n");
    }

    #[tokio::test]
    async fn test_empty_set_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resulturls");

        let written = write_result_file(&path, &ResultSet::new()).await.unwrap();

        assert_eq!(written, 0);
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
