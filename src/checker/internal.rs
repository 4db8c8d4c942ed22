// src/checker/internal.rs
// =============================================================================
// This module checks internal links against the filesystem.
//
// For every internal link:
// 1. Test whether the resolved path exists (the classifier already cut off
//    any "#fragment", we check files, not anchors)
// 2. Record a broken link if it does not
//
// Nothing is written; this is a pure existence check.
// =============================================================================

use super::classify::InternalLink;
use super::{BrokenDetail, BrokenLink, Progress};

// Checks every internal link and returns the broken ones
pub fn check_internal_links(links: &[InternalLink], progress: &Progress) -> Vec<BrokenLink> {
    progress.line("🔍 Checking internal links...");

    let mut broken = Vec::new();

    for link in links {
        if !link.resolved.exists() {
            progress.line(&format!(
                "❌ {}: {} -> {} (NOT FOUND)",
                link.source.display(),
                link.link,
                link.resolved.display()
            ));
            broken.push(BrokenLink {
                source: link.source.clone(),
                link: link.link.clone(),
                detail: BrokenDetail::Missing(link.resolved.clone()),
            });
        }
    }

    broken
}
