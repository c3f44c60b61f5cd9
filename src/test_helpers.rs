//! Shared test utilities for the docsmith test suite.
//!
//! Provides fixture setup and manifest lookups that panic with a useful
//! message on a miss.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let vision = find_document(&manifest, "vision.html");
//! assert_eq!(vision.title, "Vision");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::Document;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        if entry.path().is_file() {
            std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
        }
    }
    tmp
}

// =========================================================================
// Manifest lookups
// =========================================================================

/// Find a document by output filename. Panics if not found.
pub fn find_document<'a>(manifest: &'a Manifest, output_filename: &str) -> &'a Document {
    manifest
        .documents
        .iter()
        .find(|d| d.output_filename == output_filename)
        .unwrap_or_else(|| {
            let names = output_filenames(manifest);
            panic!("document '{output_filename}' not found. Available: {names:?}")
        })
}

/// All output filenames in manifest order.
pub fn output_filenames(manifest: &Manifest) -> Vec<&str> {
    manifest
        .documents
        .iter()
        .map(|d| d.output_filename.as_str())
        .collect()
}
