//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scan manifest, converts every document to
//! an HTML fragment and wraps it in the shared page template.
//!
//! ## Page Layout
//!
//! Every page has the same fixed layout:
//!
//! - **Navbar**: brand link, "Home", and four navigation slots (Proposal,
//!   Vision, Architecture, Docs). One slot is marked `active` per page.
//! - **Back link**: "← Back to Index", omitted on the index page itself.
//! - **Content**: the converted document.
//! - **Footer**: site footer text.
//!
//! ## Active Navigation Slot
//!
//! The active slot is chosen from the output filename by substring match
//! (see [`ActiveNav::for_output`]): `proposal`, `vision` and `architecture`
//! each light up their own slot, and a page matching none of them lights up
//! "Docs".
//!
//! ## Output Structure
//!
//! ```text
//! website/docs/
//! ├── index.html
//! ├── project_proposal.html
//! ├── vision.html
//! └── architecture.html
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Template values are auto-escaped; only the converted document fragment is
//! inserted pre-escaped, since [`crate::markup`] already escaped its source.
//!
//! Documents are independent, so they are converted in parallel on the rayon
//! pool. The report keeps manifest order.

use crate::config::{NavConfig, SiteConfig, SiteInfo};
use crate::markup;
use crate::scan::Manifest;
use crate::types::Document;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Which of the four navigation slots is highlighted on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveNav {
    pub proposal: bool,
    pub vision: bool,
    pub architecture: bool,
    /// Fallback slot, set only when none of the others match.
    pub docs: bool,
}

impl ActiveNav {
    /// Compute the active slots for an output filename.
    pub fn for_output(output_filename: &str) -> Self {
        let proposal = output_filename.contains("proposal");
        let vision = output_filename.contains("vision");
        let architecture = output_filename.contains("architecture");
        Self {
            proposal,
            vision,
            architecture,
            docs: !(proposal || vision || architecture),
        }
    }
}

/// One page written by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub filename: String,
    pub output_filename: String,
    pub title: String,
}

/// Summary of a generate run, in manifest order.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
}

pub fn generate(
    manifest: &Manifest,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let pages = manifest
        .documents
        .par_iter()
        .map(|doc| generate_document(doc, &manifest.config, source_dir, output_dir))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "generated {} pages in {}",
        pages.len(),
        output_dir.display()
    );
    Ok(GenerateReport { pages })
}

fn generate_document(
    doc: &Document,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GeneratedPage, GenerateError> {
    let source_path = source_dir.join(&doc.source_path);
    let markdown = fs::read_to_string(&source_path).map_err(|source| GenerateError::ReadSource {
        path: source_path.clone(),
        source,
    })?;

    let fragment = markup::to_html(&markup::normalize_newlines(&markdown));
    let page = render_page(&doc.title, &doc.output_filename, &fragment, config);

    let target_path = output_dir.join(&doc.output_filename);
    fs::write(&target_path, page.into_string()).map_err(|source| GenerateError::WriteOutput {
        path: target_path.clone(),
        source,
    })?;
    log::debug!("converted {} -> {}", doc.filename, target_path.display());

    Ok(GeneratedPage {
        filename: doc.filename.clone(),
        output_filename: doc.output_filename.clone(),
        title: doc.title.clone(),
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, site: &SiteInfo, content: Markup) -> Markup {
    let background_css = format!("body {{ background-color: {}; }}", site.background);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site.name) }
                link rel="stylesheet" href=(site.stylesheet);
                style { (PreEscaped(background_css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the global navbar with the four documentation slots
pub fn render_nav(site: &SiteInfo, nav: &NavConfig, active: ActiveNav) -> Markup {
    html! {
        nav.navbar {
            div.nav-container {
                a.brand href=(site.home_href) { (site.name) }
                ul.nav-links {
                    li { a.nav-link href=(site.home_href) { "Home" } }
                    (nav_slot(&nav.proposal, "Proposal", active.proposal))
                    (nav_slot(&nav.vision, "Vision", active.vision))
                    (nav_slot(&nav.architecture, "Architecture", active.architecture))
                    (nav_slot(&site.index_page, "Docs", active.docs))
                }
                a.btn-github href=(site.repository_url) target="_blank" {
                    "GitHub " (PreEscaped("&rarr;"))
                }
            }
        }
    }
}

fn nav_slot(href: &str, label: &str, active: bool) -> Markup {
    html! {
        li { a.nav-link.active[active] href=(href) { (label) } }
    }
}

fn back_link(index_page: &str) -> Markup {
    html! {
        a.nav-link href=(index_page)
            style="display:inline-block; margin-bottom:1rem; color:var(--primary); padding:0;" {
            (PreEscaped("&larr;")) " Back to Index"
        }
    }
}

/// Renders one documentation page around an already-converted fragment.
pub fn render_page(
    title: &str,
    output_filename: &str,
    fragment: &str,
    config: &SiteConfig,
) -> Markup {
    let site = &config.site;
    let active = ActiveNav::for_output(output_filename);
    let show_back_link = output_filename != site.index_page;

    let content = html! {
        (render_nav(site, &config.nav, active))
        div.container {
            div.docs-content {
                @if show_back_link {
                    (back_link(&site.index_page))
                }
                (PreEscaped(fragment))
            }
        }
        footer {
            p { (site.footer) }
        }
    };

    base_document(title, site, content)
}

// ============================================================================
// Tests
// ============================================================================
