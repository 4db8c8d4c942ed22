// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: point it at a repository root and it checks
// every README.md underneath. All knobs have defaults, so
//
//   doc-link-guardian
//
// on its own scans the current directory.
// =============================================================================

use crate::checker::Progress;
use crate::config::{CheckerConfig, HttpConfig, DEFAULT_FILE_NAME};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "doc-link-guardian",
    version,
    about = "Check README files in a repository for broken internal and external links",
    long_about = "doc-link-guardian walks a repository, extracts links from every README.md, \
                  checks internal links against the filesystem and sends HEAD requests to external links \
                  with HEAD requests. Exits with 1 if any link is broken, which makes it \
                  handy as a CI step."
)]
pub struct Cli {
    /// Repository root to scan
    ///
    /// Links starting with '/' resolve against this directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Exact filename of the documentation files to scan
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,

    /// Timeout for each external request, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Pause after each external request, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Print the result as JSON instead of the text report
    ///
    /// Progress lines are written to stderr in this mode
    #[arg(long)]
    pub json: bool,

    /// Only print the final report, no per-file or per-link progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn checker_config(&self) -> CheckerConfig {
        let mut config = CheckerConfig::new(&self.root);
        config.file_name = self.file_name.clone();
        config.http = HttpConfig {
            timeout: Duration::from_secs(self.timeout),
            delay: Duration::from_millis(self.delay_ms),
        };
        config
    }

    pub fn progress(&self) -> Progress {
        if self.quiet {
            Progress::Quiet
        } else if self.json {
            Progress::Stderr
        } else {
            Progress::Stdout
        }
    }
}
