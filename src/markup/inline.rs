//! Inline span parsing: bold, italic, links and inline code.
//!
//! Input is a single line (or table cell) that has already been HTML-escaped.
//! Spans are resolved by four regex substitutions applied in a fixed order,
//! each pass seeing the output of the previous one:
//!
//! 1. `**bold**` → `<strong>`
//! 2. `*italic*` → `<em>`
//! 3. `[label](url)` → `<a href>` with [`rewrite_link_url`] applied
//! 4. `` `code` `` → `<code>`
//!
//! All quantifiers are lazy and matching is leftmost-first, so runs of three
//! or more asterisks pair up the way the regexes dictate rather than as
//! balanced delimiters. Markup produced by an earlier pass is visible to the
//! later ones (`` `*x*` `` becomes `<code><em>x</em></code>`).

use regex::{Captures, Regex};
use std::sync::LazyLock;

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

static ITALIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").expect("code pattern is valid"));

/// Resolve inline spans in one escaped line.
pub fn parse_inline(text: &str) -> String {
    let text = BOLD_PATTERN.replace_all(text, "<strong>${1}</strong>");
    let text = ITALIC_PATTERN.replace_all(&text, "<em>${1}</em>");
    let text = LINK_PATTERN.replace_all(&text, |caps: &Captures| {
        let label = &caps[1];
        let url = rewrite_link_url(&caps[2]);
        format!(r#"<a href="{url}">{label}</a>"#)
    });
    let text = CODE_PATTERN.replace_all(&text, "<code>${1}</code>");
    text.into_owned()
}

/// Rewrite a link target so links between source documents keep working
/// once the documents are published side by side as HTML.
///
/// - a trailing `.md` becomes `.html`
/// - every `docs/` segment is removed, wherever it appears
///
/// The two rules are independent.
pub fn rewrite_link_url(url: &str) -> String {
    let url = match url.strip_suffix(".md") {
        Some(stem) => format!("{stem}.html"),
        None => url.to_string(),
    };
    url.replace("docs/", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_italic_resolve_independently() {
        assert_eq!(parse_inline("**a** and *b*"), "<strong>a</strong> and <em>b</em>");
    }

    #[test]
    fn bold_is_non_greedy() {
        assert_eq!(
            parse_inline("**one** two **three**"),
            "<strong>one</strong> two <strong>three</strong>"
        );
    }

    #[test]
    fn triple_asterisks_pair_left_to_right() {
        // Bold takes the first `**`, leaving stray asterisks for the italic pass
        assert_eq!(parse_inline("***x***"), "<strong><em>x</strong></em>");
    }

    #[test]
    fn unpaired_asterisk_passes_through() {
        assert_eq!(parse_inline("2 * 3 = 6"), "2 * 3 = 6");
    }

    #[test]
    fn doubled_marker_with_nothing_inside_is_empty_italic() {
        assert_eq!(parse_inline("a ** b"), "a <em></em> b");
    }

    #[test]
    fn link_to_doc_is_rewritten() {
        assert_eq!(
            parse_inline("[Spec](docs/architecture.md)"),
            r#"<a href="architecture.html">Spec</a>"#
        );
    }

    #[test]
    fn external_link_left_alone() {
        assert_eq!(
            parse_inline("see [site](https://example.com/page)"),
            r#"see <a href="https://example.com/page">site</a>"#
        );
    }

    #[test]
    fn link_label_keeps_earlier_markup() {
        assert_eq!(
            parse_inline("[**Guide**](guide.md)"),
            r#"<a href="guide.html"><strong>Guide</strong></a>"#
        );
    }

    #[test]
    fn inline_code() {
        assert_eq!(parse_inline("run `cargo build` now"), "run <code>cargo build</code> now");
    }

    #[test]
    fn code_pass_runs_after_emphasis() {
        assert_eq!(parse_inline("`*x*`"), "<code><em>x</em></code>");
    }

    #[test]
    fn unpaired_backtick_passes_through() {
        assert_eq!(parse_inline("a ` b"), "a ` b");
    }

    #[test]
    fn escaped_entities_untouched() {
        assert_eq!(parse_inline("a &lt;b&gt; &amp; c"), "a &lt;b&gt; &amp; c");
    }

    // =========================================================================
    // URL rewriting
    // =========================================================================

    #[test]
    fn rewrite_md_suffix() {
        assert_eq!(rewrite_link_url("vision.md"), "vision.html");
    }

    #[test]
    fn rewrite_strips_docs_segment() {
        assert_eq!(rewrite_link_url("docs/vision.md"), "vision.html");
        assert_eq!(rewrite_link_url("../docs/img.png"), "../img.png");
    }

    #[test]
    fn rewrite_ignores_md_not_at_end() {
        assert_eq!(rewrite_link_url("notes.md#intro"), "notes.md#intro");
    }

    #[test]
    fn rewrite_only_touches_the_final_md() {
        assert_eq!(rewrite_link_url("a.md/b.md"), "a.md/b.html");
        assert_eq!(rewrite_link_url("docs/readme.md.md"), "readme.md.html");
    }

    #[test]
    fn rewrite_applies_both_rules_to_absolute_urls() {
        assert_eq!(
            rewrite_link_url("https://example.com/docs/guide.md"),
            "https://example.com/guide.html"
        );
    }
}
