// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Extracts link targets from file text ([x](y), ![x](y))
// - html: Extracts link targets from embedded <a href> / <img src> tags
// - classify: Sorts targets into internal/external and resolves paths
// - internal: Checks internal links against the filesystem
// - http: Checks external links with HEAD requests
//
// This file also defines the records shared by the validators and the
// report: BrokenLink and the Progress printer.
// =============================================================================

mod classify;
mod html;
mod http;
mod internal;
mod markdown;

pub use classify::LinkInventory;
pub use http::{build_client, check_external_links};
pub use internal::check_internal_links;
pub use markdown::{decode_text, extract_links};

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// A link that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    /// The documentation file containing the link
    #[serde(serialize_with = "serialize_path")]
    pub source: PathBuf,
    /// The link exactly as written in the file
    pub link: String,
    pub detail: BrokenDetail,
}

/// Why a link is broken
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BrokenDetail {
    /// Internal link: the fragment-stripped path that does not exist
    Missing(#[serde(serialize_with = "serialize_path")] PathBuf),
    /// External link: HTTP status >= 400
    Status(u16),
    /// External link: the request failed before a response arrived
    Error(String),
}

impl fmt::Display for BrokenDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrokenDetail::Missing(path) => write!(f, "{}", path.display()),
            BrokenDetail::Status(code) => write!(f, "{}", code),
            BrokenDetail::Error(message) => write!(f, "{}", message),
        }
    }
}

// Paths go into JSON as displayed, so a non-UTF-8 name is written lossily
// instead of failing the whole report
fn serialize_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&path.display())
}

/// Where per-link progress lines go
///
/// Human mode prints to stdout. With --json, stdout is reserved for the
/// JSON document, so progress moves to stderr. --quiet drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Stdout,
    Stderr,
    Quiet,
}

impl Progress {
    pub fn line(&self, message: &str) {
        match self {
            Progress::Stdout => println!("{}", message),
            Progress::Stderr => eprintln!("{}", message),
            Progress::Quiet => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_display() {
        assert_eq!(BrokenDetail::Status(404).to_string(), "404");
        assert_eq!(
            BrokenDetail::Missing(PathBuf::from("/repo/missing.md")).to_string(),
            "/repo/missing.md"
        );
        assert_eq!(
            BrokenDetail::Error("Request timed out".to_string()).to_string(),
            "Request timed out"
        );
    }

    #[test]
    fn test_detail_serializes_tagged() {
        let json = serde_json::to_value(BrokenDetail::Status(404)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "status", "value": 404 }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_serialize() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = PathBuf::from(OsStr::from_bytes(b"/repo/caf\xe9/README.md"));
        let broken = BrokenLink {
            source: name.clone(),
            link: "x.md".to_string(),
            detail: BrokenDetail::Missing(name.join("../x.md")),
        };

        let json = serde_json::to_value(&broken).unwrap();
        assert_eq!(json["source"], "/repo/caf\u{FFFD}/README.md");
        assert_eq!(json["detail"]["kind"], "missing");
        assert_eq!(json["detail"]["value"], "/repo/caf\u{FFFD}/README.md/../x.md");
    }
}
