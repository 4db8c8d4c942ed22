// src/report.rs
// =============================================================================
// Aggregation and printing of the final report.
//
// Everything here is computed once, at the end of a run, from the lists the
// validators produced. A category with zero links has a 100% success rate.
// =============================================================================

use crate::checker::BrokenLink;
use serde::Serialize;

/// Totals for one link category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub total: usize,
    pub broken: usize,
}

impl CategorySummary {
    pub fn working(&self) -> usize {
        self.total.saturating_sub(self.broken)
    }

    /// Percentage of working links; 100.0 when there are none
    pub fn success_rate(&self) -> f64 {
        success_rate(self.total, self.broken)
    }
}

/// Structured summary: category -> {total, broken}
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub internal: CategorySummary,
    pub external: CategorySummary,
}

impl Summary {
    pub fn broken(&self) -> usize {
        self.internal.broken + self.external.broken
    }

    pub fn has_broken(&self) -> bool {
        self.broken() > 0
    }

    pub fn overall_rate(&self) -> f64 {
        success_rate(
            self.internal.total + self.external.total,
            self.broken(),
        )
    }
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub files_scanned: usize,
    pub summary: Summary,
    pub broken_internal: Vec<BrokenLink>,
    pub broken_external: Vec<BrokenLink>,
}

impl Report {
    pub fn new(
        files_scanned: usize,
        internal_total: usize,
        external_total: usize,
        broken_internal: Vec<BrokenLink>,
        broken_external: Vec<BrokenLink>,
    ) -> Self {
        let summary = Summary {
            internal: CategorySummary {
                total: internal_total,
                broken: broken_internal.len(),
            },
            external: CategorySummary {
                total: external_total,
                broken: broken_external.len(),
            },
        };

        Self {
            files_scanned,
            summary,
            broken_internal,
            broken_external,
        }
    }
}

// (total - broken) / total * 100, or 100 when total is zero
pub fn success_rate(total: usize, broken: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (total.saturating_sub(broken)) as f64 / total as f64 * 100.0
}

// Prints the human-readable multi-section report to stdout
pub fn print_report(report: &Report) {
    let summary = &report.summary;

    println!("\n{}", "=".repeat(80));
    println!("📊 LINK CHECKER REPORT");
    println!("{}", "=".repeat(80));

    print_category("📁 Internal Links:", &summary.internal);
    print_category("🌐 External Links:", &summary.external);

    if !report.broken_internal.is_empty() {
        println!(
            "\n❌ BROKEN INTERNAL LINKS ({}):",
            report.broken_internal.len()
        );
        print_broken(&report.broken_internal, "Resolved to");
    }

    if !report.broken_external.is_empty() {
        println!(
            "\n❌ BROKEN EXTERNAL LINKS ({}):",
            report.broken_external.len()
        );
        print_broken(&report.broken_external, "Error");
    }

    println!("\n📈 Success Rates:");
    println!("   Internal Links: {:.1}%", summary.internal.success_rate());
    println!("   External Links: {:.1}%", summary.external.success_rate());
    println!("   Overall: {:.1}%", summary.overall_rate());

    if summary.has_broken() {
        println!("\n⚠️  Found {} broken links", summary.broken());
    } else {
        println!("\n✅ All links are working!");
    }
}

fn print_category(title: &str, category: &CategorySummary) {
    println!("\n{}", title);
    println!("   Total: {}", category.total);
    println!("   Working: {}", category.working());
    println!("   Broken: {}", category.broken);
}

fn print_broken(broken: &[BrokenLink], detail_label: &str) {
    for link in broken {
        println!("   • {}", link.source.display());
        println!("     Link: {}", link.link);
        println!("     {}: {}", detail_label, link.detail);
        println!();
    }
}
