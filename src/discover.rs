// src/discover.rs
// =============================================================================
// This module finds the documentation files we are going to scan.
//
// Strategy:
// - Validate that the repository root exists and is a directory
// - Walk the tree recursively with `walkdir`
// - Keep every file whose name matches exactly (e.g. README.md), including
//   symlinks that point at a file
//
// Entries we cannot read (permission denied, broken symlink loops) are
// logged and skipped; one unreadable directory never aborts the scan.
// =============================================================================

use crate::error::CheckerError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

// Finds every file named `file_name` under `root`, at any depth
//
// Returns the paths sorted by walk order (directory entries sorted by name),
// so two runs over the same tree see the files in the same order.
//
// A missing root is an error rather than an empty result: an empty list
// would otherwise be reported as "all links are working".
pub fn discover_files(root: &Path, file_name: &str) -> Result<Vec<PathBuf>, CheckerError> {
    if !root.exists() {
        return Err(CheckerError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CheckerError::RootNotDirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_name() != file_name {
            continue;
        }

        // walkdir reports a symlink's own type; follow it to see the target
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());

        if is_file {
            debug!(path = %entry.path().display(), "discovered documentation file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
