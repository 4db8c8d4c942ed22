// src/logging.rs
// =============================================================================
// Diagnostics setup. Report and progress lines are plain prints; everything
// else (skipped entries, decoding fallbacks, per-request detail) goes through
// `tracing` to stderr so it never mixes with JSON on stdout.
// =============================================================================

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Installs the global subscriber: WARN by default, DEBUG with --verbose
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
