//! CLI output formatting for the scan and generate stages.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Documents
//! 001 Architecture
//!     Source: architecture.md
//!     Output: architecture.html
//! 002 Index
//!     Source: index.md
//!     Output: index.html
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! Converted architecture.md -> architecture.html (Architecture)
//! Converted index.md -> index.html (Index)
//!
//! Generated 2 pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects. The one exception is the config line in scan
//! output, which checks whether `config.toml` exists.

use crate::generate::GenerateReport;
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan output: one entry per document, then the config source.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Documents".to_string()];

    if manifest.documents.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, doc) in manifest.documents.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), doc.title));
        lines.push(format!("    Source: {}", doc.source_path));
        lines.push(format!("    Output: {}", doc.output_filename));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (defaults)".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate output: one `Converted` line per page, with its title,
/// plus a summary.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .map(|page| {
            format!(
                "Converted {} -> {} ({})",
                page.filename, page.output_filename, page.title
            )
        })
        .collect();

    lines.push(String::new());
    lines.push(format!(
        "Generated {}",
        pluralize(report.pages.len(), "page", "pages")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
