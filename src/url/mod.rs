//! URL handling module for Link-Harvester
//!
//! This module turns listing-page hrefs into absolute links and absolute links
//! into local file names.

mod filename;
mod prefix;

// Re-export main functions
pub use filename::local_filename;
pub use prefix::{absolutize, derive_prefix};
