//! Source directory scanning and manifest generation.
//!
//! Stage 1 of the build. Lists the source directory, picks out the markdown
//! documents and derives their output names, producing a [`Manifest`] that
//! the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                            # Source directory
//! ├── config.toml                  # Site configuration (optional)
//! ├── index.md                     # → index.html (no back link)
//! ├── project_proposal.md          # → project_proposal.html
//! ├── Vision.md                    # → vision.html
//! ├── architecture.md              # → architecture.html
//! ├── notes.txt                    # ignored (not .md)
//! └── drafts/                      # ignored (not scanned recursively)
//! ```
//!
//! Only regular files directly inside the source directory whose extension
//! is exactly `md` become documents. They are sorted by filename so builds
//! are reproducible.

use crate::config::{self, SiteConfig};
use crate::naming::parse_document_name;
use crate::types::Document;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Source directory not found: {0}")]
    MissingSource(PathBuf),
}

/// Manifest output from the scan stage
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub documents: Vec<Document>,
    pub config: SiteConfig,
}

const MARKDOWN_EXTENSION: &str = "md";

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingSource(root.to_path_buf()));
    }

    let documents = collect_documents(root)?;
    log::info!(
        "found {} documents in {}",
        documents.len(),
        root.display()
    );

    // Uses defaults if config.toml doesn't exist
    let config = config::load_config(root)?;

    Ok(Manifest { documents, config })
}

fn collect_documents(root: &Path) -> Result<Vec<Document>, ScanError> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            log::debug!("skipping {}", entry.path().display());
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        let name = parse_document_name(&filename);
        let source_path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .into_owned();

        documents.push(Document {
            filename,
            source_path,
            output_filename: name.output_filename,
            title: name.title,
        });
    }

    Ok(documents)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e == MARKDOWN_EXTENSION)
        .unwrap_or(false)
}
