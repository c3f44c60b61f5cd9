//! Markdown-to-HTML conversion.
//!
//! A deliberately small, line-oriented converter for project documentation.
//! It is not CommonMark: each line is classified on its own, and a handful of
//! flags carry list, table and code-block state from one line to the next.
//!
//! ## Pipeline
//!
//! ```text
//! raw text ─→ escape ─→ block parser ─→ HTML fragment
//!                            │
//!                            └─→ inline parser (per line / table cell)
//! ```
//!
//! | Module | Role |
//! |--------|------|
//! | [`escape`] | Escapes `&`, `<`, `>` once, over the whole document |
//! | [`block`] | Line classifier: fences, tables, headings, quotes, lists, paragraphs |
//! | [`inline`] | Bold, italic, links (with `.md` → `.html` rewriting) and inline code |
//!
//! Every function here is total: malformed markup passes through literally
//! rather than failing, so there is no error type.

pub mod block;
pub mod escape;
pub mod inline;

pub use block::parse_blocks;
pub use escape::escape_html;
pub use inline::{parse_inline, rewrite_link_url};

/// Turn `\r\n` and lone `\r` line endings into `\n`.
///
/// Applied to file contents before [`to_html`], which splits on `\n` only.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Convert one document's raw markdown into an HTML fragment.
///
/// Escaping runs exactly once, before block parsing.
pub fn to_html(markdown: &str) -> String {
    parse_blocks(&escape_html(markdown))
}
