use crate::error::FetchError;
use crate::models::AssetSource;
use anyhow::{Context, Result};
use reqwest::Client;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct Fetcher {
    client: Client,
    output_dir: PathBuf,
}

impl Fetcher {
    pub fn new(output_dir: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            output_dir: PathBuf::from(output_dir),
        })
    }

    /// Downloads `source` into the output directory, replacing any existing
    /// file with the same name. The body is streamed to a `.part` sibling
    /// and renamed once the transfer completes, so a failed run never
    /// leaves a half-written asset at the final path.
    pub async fn fetch(&self, source: &AssetSource) -> Result<(), FetchError> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).map_err(|e| FetchError::DirectoryCreation {
                path: self.output_dir.clone(),
                source: e,
            })?;
        }

        let output_path = source.destination(&self.output_dir);
        let partial_path = PathBuf::from(format!("{}.part", output_path.display()));

        if let Err(e) = self.fetch_to_partial(source, &partial_path).await {
            let _ = fs::remove_file(&partial_path);
            return Err(e);
        }

        fs::rename(&partial_path, &output_path).map_err(|e| FetchError::Write {
            path: output_path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %output_path.display(), "asset stored");

        Ok(())
    }

    async fn fetch_to_partial(
        &self,
        source: &AssetSource,
        partial_path: &Path,
    ) -> Result<(), FetchError> {
        let mut response =
            self.client
                .get(&source.url)
                .send()
                .await
                .map_err(|e| FetchError::Network {
                    url: source.url.clone(),
                    source: e,
                })?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus {
                url: source.url.clone(),
                status: response.status(),
            });
        }

        let mut file = File::create(partial_path).map_err(|e| FetchError::Write {
            path: partial_path.to_path_buf(),
            source: e,
        })?;

        let mut downloaded = 0u64;

        while let Some(chunk) = response.chunk().await.map_err(|e| FetchError::Network {
            url: source.url.clone(),
            source: e,
        })? {
            let n = chunk.len();
            if n == 0 {
                break;
            }
            file.write_all(&chunk).map_err(|e| FetchError::Write {
                path: partial_path.to_path_buf(),
                source: e,
            })?;
            downloaded += n as u64;
        }

        file.flush().map_err(|e| FetchError::Write {
            path: partial_path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(url = %source.url, bytes = downloaded, "transfer finished");

        Ok(())
    }
}
