// src/checker/classify.rs
// =============================================================================
// This module sorts extracted link targets into internal and external links.
//
// Rules, in order:
// 1. "#..." (pure anchor) or "mailto:..."  -> skipped, nothing recorded
// 2. "http://..." or "https://..."          -> external
// 3. anything else                           -> internal
//
// Internal links are resolved to a filesystem path right away:
// - "/docs/x.md"  resolves against the repository root ("/" is stripped)
// - "docs/x.md"   resolves against the directory holding the source file
//
// The "#fragment" of the target is cut off before joining, so a '#' in the
// root or in a parent directory name never truncates the resolved path.
//
// Resolution is purely lexical (Path::join). We never canonicalize, so
// "../README.md" stays in the path and the OS resolves it at check time.
// =============================================================================

use std::path::{Path, PathBuf};
use tracing::debug;

/// An internal link found in a documentation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalLink {
    /// The file the link was found in
    pub source: PathBuf,
    /// The target exactly as written
    pub link: String,
    /// The target, without its fragment, joined onto the root or the
    /// source's directory
    pub resolved: PathBuf,
}

/// An external (http/https) link found in a documentation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub source: PathBuf,
    pub url: String,
}

/// What a single link target turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Anchor or mailto: nothing to check
    Skipped,
    External,
    /// Internal, with its resolved path
    Internal(PathBuf),
}

// Decides the category of one target and resolves internal paths
//
// Parameters:
//   target: the link target as extracted
//   source: path of the file the link appeared in
//   root: the repository root
pub fn classify_link(target: &str, source: &Path, root: &Path) -> LinkKind {
    if target.starts_with('#') || target.starts_with("mailto:") {
        return LinkKind::Skipped;
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        return LinkKind::External;
    }

    let path = strip_fragment(target);

    let resolved = if path.starts_with('/') {
        root.join(path.trim_start_matches('/'))
    } else {
        // Files found by the discoverer always have a parent; a bare
        // relative source name falls back to the current directory.
        source.parent().unwrap_or(Path::new("")).join(path)
    };

    LinkKind::Internal(resolved)
}

// "guide.md#install" -> "guide.md"
fn strip_fragment(target: &str) -> &str {
    match target.split_once('#') {
        Some((path, _)) => path,
        None => target,
    }
}

/// Every checkable link collected during extraction
///
/// The two lists are only appended to; validators read them afterwards.
#[derive(Debug, Default)]
pub struct LinkInventory {
    pub internal: Vec<InternalLink>,
    pub external: Vec<ExternalLink>,
}

impl LinkInventory {
    pub fn new() -> Self {
        Self::default()
    }

    // Classifies all targets found in `source` and records the checkable ones
    pub fn add_links(&mut self, links: Vec<String>, source: &Path, root: &Path) {
        for link in links {
            match classify_link(&link, source, root) {
                LinkKind::Skipped => {
                    debug!(link = %link, "skipping anchor/mailto link");
                }
                LinkKind::External => {
                    self.external.push(ExternalLink {
                        source: source.to_path_buf(),
                        url: link,
                    });
                }
                LinkKind::Internal(resolved) => {
                    self.internal.push(InternalLink {
                        source: source.to_path_buf(),
                        link,
                        resolved,
                    });
                }
            }
        }
    }
}
