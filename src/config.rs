// src/config.rs
// =============================================================================
// Run configuration. Built once from the command line in main.rs; there is
// no config file and no environment lookup.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// Documentation filename searched for by default
pub const DEFAULT_FILE_NAME: &str = "README.md";

/// Per-request timeout for external requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause after every external request
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Everything a single pipeline run needs
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Repository root; root-relative links resolve against it
    pub root: PathBuf,
    /// Exact filename of the documentation files to scan
    pub file_name: String,
    pub http: HttpConfig,
}

/// Settings for the external link validator
#[derive(Debug, Clone, Copy)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub delay: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            delay: DEFAULT_DELAY,
        }
    }
}

impl CheckerConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            http: HttpConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckerConfig::new("docs");
        assert_eq!(config.root, PathBuf::from("docs"));
        assert_eq!(config.file_name, "README.md");
        assert_eq!(config.http.timeout, Duration::from_secs(10));
        assert_eq!(config.http.delay, Duration::from_millis(500));
    }
}
