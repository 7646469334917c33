//! Newline-delimited URL list reader

use harvest_domain::UrlSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum UrlFileError {
    #[error("Failed to read URL file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the whole URL file before a run starts
pub async fn read_url_file(path: impl AsRef<Path>) -> Result<UrlSet, UrlFileError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| UrlFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let urls = parse_url_lines(&content);
    debug!("Read {} unique URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// One URL per line. Line endings and surrounding whitespace are stripped;
/// blank lines and `#` comments are skipped.
pub fn parse_url_lines(content: &str) -> UrlSet {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_line_endings_and_blanks() {
        let urls = parse_url_lines("http://a\r\n\nhttp://b  \n# comment\nhttp://a\n");
        assert_eq!(urls.len(), 2);
        assert!(urls.contains("http://a"));
        assert!(urls.contains("http://b"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_url_lines("").is_empty());
        assert!(parse_url_lines("\n\n").is_empty());
    }

    #[tokio::test]
    async fn test_read_url_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("url-data");
        std::fs::write(&path, "http://a\nhttp://b\n").unwrap();

        let urls = read_url_file(&path).await.unwrap();
        assert_eq!(urls.len(), 2);
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_url_file(dir.path().join("missing")).await.unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
