//! Filesystem side of a harvest: the output directory and downloaded files

use crate::HarvestError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of persisting one downloaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// All bytes were written
    Written { path: PathBuf, bytes: usize },

    /// The file could not be created or written
    Failed { path: PathBuf, error: String },
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { path, .. } => write!(f, "Completed write to: {}", path.display()),
            Self::Failed { path, .. } => write!(f, "Failed to write to: {}", path.display()),
        }
    }
}

/// Writes `content` to `path`, creating or truncating the file
///
/// An existing file is overwritten without warning. I/O errors are logged and
/// returned as [`WriteOutcome::Failed`]; a failed write may leave a truncated
/// file behind.
pub async fn write_file(content: &[u8], path: &Path) -> WriteOutcome {
    match tokio::fs::write(path, content).await {
        Ok(()) => WriteOutcome::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        },
        Err(e) => {
            tracing::warn!("Cannot write to file {}: {}", path.display(), e);
            WriteOutcome::Failed {
                path: path.to_path_buf(),
                error: e.to_string(),
            }
        }
    }
}

/// State of the output directory when a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDir {
    /// The directory (and any missing parents) was created
    Created,
    /// The directory was already there and will be written into
    Existing,
}

/// Creates the output directory, tolerating one that already exists
///
/// # Returns
///
/// * `Ok(OutputDir)` - The directory is ready for writing
/// * `Err(HarvestError::OutputDir)` - The path is unusable (e.g. it is a
///   regular file, or permission was denied)
pub async fn prepare_output_dir(path: &Path) -> Result<OutputDir, HarvestError> {
    if let Ok(metadata) = tokio::fs::metadata(path).await {
        if metadata.is_dir() {
            tracing::warn!("Output directory ({}) already exists", path.display());
            return Ok(OutputDir::Existing);
        }
    }

    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| HarvestError::OutputDir {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Created output directory {}", path.display());
    Ok(OutputDir::Created)
}
