//! Shared types passed from the scan stage to the generate stage.
//!
//! These types are serialized by `docsmith scan --json` and must stay stable
//! between the two stages.

use serde::{Deserialize, Serialize};

/// A markdown document found in the source directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Source filename as found on disk (`Project_Proposal.md`)
    pub filename: String,
    /// Path of the source file relative to the source directory
    pub source_path: String,
    /// Lowercased output filename (`project_proposal.html`)
    pub output_filename: String,
    /// Page title derived from the filename ("Project Proposal")
    pub title: String,
}
