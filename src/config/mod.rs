//! Configuration module for Link-Harvester
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, [`Config::default`] applies.
//!
//! # Example
//!
//! ```no_run
//! use link_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Following up to {} redirects", config.http.max_redirects);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HarvestConfig, HttpConfig, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS,
};

// Re-export parser functions
pub use parser::{apply_overrides, load_config, parse_config};
pub use validation::{validate, validate_prefix};
