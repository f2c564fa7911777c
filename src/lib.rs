//! Library behind the `model-dl` binary: fetches a single remote model
//! asset into a local directory.

pub mod cli;
pub mod downloader;
pub mod error;
pub mod logging;
pub mod models;
