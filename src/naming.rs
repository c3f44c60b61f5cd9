//! Filename conventions for source documents.
//!
//! Every document name yields two derived values:
//!
//! - **Output filename**: the source filename with its extension replaced by
//!   `.html`, lowercased in full (`Project_Proposal.md` → `project_proposal.html`).
//! - **Display title**: the stem with underscores turned into spaces, then
//!   title-cased per word (`project_proposal` → "Project Proposal").

use std::path::Path;

/// Result of parsing a document filename like `Project_Proposal.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentName {
    /// Lowercased `<stem>.html`.
    pub output_filename: String,
    /// Human title used in `<title>`.
    pub title: String,
}

/// Parse a document filename into its derived names.
///
/// - `"vision.md"` → output="vision.html", title="Vision"
/// - `"Project_Proposal.md"` → output="project_proposal.html", title="Project Proposal"
/// - `"README"` → output="readme.html", title="Readme"
pub fn parse_document_name(filename: &str) -> DocumentName {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    let output_filename = path.with_extension("html").to_string_lossy().to_lowercase();
    let title = title_case(&stem.replace('_', " "));
    DocumentName {
        output_filename,
        title,
    }
}

/// Title-case a string: a letter that follows a non-letter is uppercased,
/// every other letter is lowercased.
///
/// Word boundaries are any non-alphabetic character, so `"api-guide"` becomes
/// `"Api-Guide"` and `"2nd step"` becomes `"2Nd Step"`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }
    result
}
