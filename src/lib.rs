//! # docsmith
//!
//! Converts a directory of markdown documentation into static HTML pages that
//! share one site template. Each `.md` file becomes one `.html` page with the
//! same navbar, footer and an "active" navigation slot picked from its
//! filename.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      docs/      →  Manifest        (filesystem → document list + config)
//! 2. Generate  Manifest   →  website/docs/   (markdown → HTML pages)
//! ```
//!
//! The manifest is plain data (`docsmith scan --json` prints it), so each
//! stage can be tested on its own.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`markup`] | The converter: escaping, block parser, inline parser, link rewriting |
//! | [`scan`] | Stage 1: lists the source directory and loads the config |
//! | [`generate`] | Stage 2: converts each document and renders the page template with Maud |
//! | [`config`] | `config.toml` loading, merging over defaults, and validation |
//! | [`naming`] | Output filename and title derivation from source filenames |
//! | [`types`] | The `Document` type shared by both stages |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## A Line-Oriented Converter, Not CommonMark
//!
//! The documentation set is small and written in a narrow markdown subset:
//! headings, bullet lists, pipe tables, fenced code and simple
//! emphasis. [`markup`] handles exactly that with one pass over the lines and
//! four regex substitutions per line. Its output is predictable and stable
//! from build to build, which matters more here than full CommonMark coverage.
//!
//! ## Maud for the Page Template
//!
//! The page chrome is generated with [Maud](https://maud.lambda.xyz/). Template
//! values from config and filenames are auto-escaped; the converted fragment
//! is spliced in pre-escaped because the converter escapes its input first.
//!
//! ## Explicit Configuration
//!
//! The site name, links, footer and index page are a [`config::SiteConfig`]
//! value passed into generation. There is no global template string.

pub mod config;
pub mod generate;
pub mod markup;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
