use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds for a single fetch, each carrying the underlying cause.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not create directory {}: {}", .path.display(), .source)]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned HTTP {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no usable file name in URL: {url}")]
    UnusableUrl { url: String },
}
