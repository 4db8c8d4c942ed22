// src/error.rs
// =============================================================================
// Fatal error conditions for a checker run.
//
// Per-link problems (missing files, 404s, timeouts) are NOT errors here -
// they become broken-link records and the run keeps going. Only conditions
// that make the whole report meaningless end up in this enum.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    /// The repository root does not exist
    #[error("repository root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The repository root exists but is a file
    #[error("repository root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    /// The shared HTTP client could not be built
    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
