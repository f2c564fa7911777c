use crate::error::FetchError;
use std::path::{Path, PathBuf};
use url::Url;

/// A remote asset and the name it is stored under locally.
#[derive(Debug, Clone)]
pub struct AssetSource {
    pub file_name: String,
    pub url: String,
}

impl AssetSource {
    /// Builds a source from a URL, taking the last path segment as the
    /// file name unless an explicit one is given.
    pub fn new(url: &str, file_name: Option<String>) -> Result<Self, FetchError> {
        let file_name = match file_name {
            Some(name) => name,
            None => file_name_from_url(url)?,
        };

        Ok(Self {
            file_name,
            url: url.to_string(),
        })
    }

    /// Full path the asset is written to inside `output_dir`.
    pub fn destination(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.file_name)
    }
}

/// Extracts the last non-empty path segment of `url` for use as a file name.
fn file_name_from_url(url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|_| FetchError::UnusableUrl {
        url: url.to_string(),
    })?;

    parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()
        .filter(|s| *s != "." && *s != "..")
        .map(|s| s.to_string())
        .ok_or_else(|| FetchError::UnusableUrl {
            url: url.to_string(),
        })
}
