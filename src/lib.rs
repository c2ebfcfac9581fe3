//! Link-Harvester: a listing-page file downloader
//!
//! This crate fetches a single HTML listing page, keeps the links that contain
//! a filter substring, and downloads each linked file into a local directory.

pub mod config;
pub mod harvest;
pub mod output;
pub mod presets;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Link-Harvester operations
///
/// Only failures that abort a whole run surface as this type. Per-link fetch
/// and write failures are reported through [`harvest::FetchOutcome`] and
/// [`harvest::WriteOutcome`] instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Listing page {url} returned HTTP {status}")]
    ListingStatus { url: String, status: u16 },

    #[error("Cannot prepare output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,

    #[error("No file name in URL: {0}")]
    NoFilename(String),

    #[error("Unsafe file name '{name}' in URL {url}")]
    UnsafeFilename { url: String, name: String },
}

/// Result type alias for Link-Harvester operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use harvest::{collect_links, fetch_file, write_file, FetchOutcome, Harvester, WriteOutcome};
pub use output::{LinkReport, LinkStatus, RunSummary};
pub use url::{absolutize, derive_prefix, local_filename};
