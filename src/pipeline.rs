// src/pipeline.rs
// =============================================================================
// The whole checker as one linear pass:
//
//   discover files -> extract + classify links per file
//                  -> check internal links -> check external links -> report
//
// Nothing survives between runs; every list lives inside run_checker().
// =============================================================================

use crate::checker::{self, LinkInventory, Progress};
use crate::config::CheckerConfig;
use crate::discover::discover_files;
use crate::report::Report;
use anyhow::Result;
use tracing::{debug, warn};

// Runs the full pipeline and returns the aggregated report
//
// Errors only for fatal conditions (missing root, HTTP client setup).
// Individual broken links end up in the report instead.
pub async fn run_checker(config: &CheckerConfig, progress: Progress) -> Result<Report> {
    let root = &config.root;

    progress.line("🔍 Starting link checker");
    progress.line(&format!("📁 Repository root: {}", root.display()));

    let files = discover_files(root, &config.file_name)?;
    progress.line(&format!(
        "\n📄 Found {} {} files",
        files.len(),
        config.file_name
    ));

    let mut inventory = LinkInventory::new();

    for file in &files {
        progress.line(&format!("Processing: {}", file.display()));

        // The file is read fully and closed before moving on
        let bytes = match tokio::fs::read(file).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Could not read {}: {}", file.display(), e);
                continue;
            }
        };

        let content = checker::decode_text(bytes);
        let links = checker::extract_links(&content);
        debug!(file = %file.display(), count = links.len(), "extracted links");

        inventory.add_links(links, file, root);
    }

    progress.line(&format!(
        "\n📊 Found {} internal and {} external links",
        inventory.internal.len(),
        inventory.external.len()
    ));

    let broken_internal = checker::check_internal_links(&inventory.internal, &progress);

    // Only build a client when there is something to check
    let broken_external = if inventory.external.is_empty() {
        Vec::new()
    } else {
        let client = checker::build_client(&config.http)?;
        checker::check_external_links(&client, &inventory.external, &config.http, &progress)
            .await
    };

    Ok(Report::new(
        files.len(),
        inventory.internal.len(),
        inventory.external.len(),
        broken_internal,
        broken_external,
    ))
}
