//! End-to-end build of the fixture documentation set.
//!
//! Runs scan → generate against a copy of `fixtures/docs/` and checks the
//! written pages.

use docsmith::{generate, scan};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Site {
    _source: TempDir,
    _output: TempDir,
    out: PathBuf,
}

impl Site {
    fn page(&self, name: &str) -> String {
        fs::read_to_string(self.out.join(name))
            .unwrap_or_else(|e| panic!("page {name} not readable: {e}"))
    }
}

fn copy_fixtures(dst: &Path) {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    for entry in fs::read_dir(fixtures).unwrap() {
        let entry = entry.unwrap();
        if entry.path().is_file() {
            fs::copy(entry.path(), dst.join(entry.file_name())).unwrap();
        }
    }
}

fn build() -> Site {
    let source = TempDir::new().unwrap();
    copy_fixtures(source.path());
    let output = TempDir::new().unwrap();
    let out = output.path().join("website/docs");

    let manifest = scan::scan(source.path()).unwrap();
    generate::generate(&manifest, source.path(), &out).unwrap();

    Site {
        _source: source,
        _output: output,
        out,
    }
}

/// The `class` of the `<a>` tag with exactly this href.
fn link_class(html: &str, href: &str) -> String {
    let needle = format!(r#"href="{href}""#);
    let tag = html
        .split("<a ")
        .skip(1)
        .map(|chunk| &chunk[..chunk.find('>').unwrap_or(chunk.len())])
        .find(|tag| tag.contains(&needle))
        .unwrap_or_else(|| panic!("no link to {href}"));
    tag.split("class=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap_or_default()
        .to_string()
}

#[test]
fn writes_one_lowercased_page_per_document() {
    let site = build();
    let mut names: Vec<String> = fs::read_dir(&site.out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "architecture.html",
            "index.html",
            "project_proposal.html",
            "vision.html",
        ]
    );
}

#[test]
fn vision_page_highlights_vision_only() {
    let site = build();
    let html = site.page("vision.html");

    assert_eq!(link_class(&html, "vision.html"), "nav-link active");
    assert_eq!(link_class(&html, "project_proposal.html"), "nav-link");
    assert_eq!(link_class(&html, "architecture.html"), "nav-link");
    assert!(html.contains("<title>Vision - Ubuntu Sovereign Stack</title>"));
    assert!(html.contains("Back to Index"));
}

#[test]
fn index_page_has_no_back_link_and_docs_active() {
    let site = build();
    let html = site.page("index.html");

    assert!(!html.contains("Back to Index"));
    assert!(html.contains("<title>Index - Ubuntu Sovereign Stack</title>"));
    assert!(html.contains(r#"<a href="vision.html">Vision</a>"#));
    assert!(html.contains(r#"<a href="project_proposal.html">Project Proposal</a>"#));
    assert!(html.contains("<p>&gt; Start with the <em>proposal</em> if you are new.</p>"));
    assert!(!html.contains("<blockquote>"));
}

#[test]
fn proposal_page_content() {
    let site = build();
    let html = site.page("project_proposal.html");

    assert_eq!(link_class(&html, "project_proposal.html"), "nav-link active");
    assert!(html.contains("<title>Project Proposal - Ubuntu Sovereign Stack</title>"));
    assert!(html.contains(
        "<p>The proposal covers <code>phase 1</code> and <em>phase 2</em>.</p>"
    ));
    assert!(html.contains(r#"<a href="architecture.html">architecture</a>"#));
}

#[test]
fn architecture_page_renders_table_and_code() {
    let site = build();
    let html = site.page("architecture.html");

    let table = "\
<table>
<thead><tr>
<th>Layer</th>
<th>Component</th>
<th>Notes</th>
</tr></thead><tbody>
<tr>
<td>Edge</td>
<td>Proxy</td>
<td><strong>TLS</strong> termination</td>
</tr>
<tr>
<td>Core</td>
<td>API</td>
<td>see <code>api.md</code></td>
</tr>
</tbody></table>";
    assert!(html.contains(table), "table not found in:\n{html}");

    let code = "\
<pre>
if [ -f *.conf ]; then
  echo \"&lt;ok&gt;\" &amp;&amp; exit 0
fi
</pre>";
    assert!(html.contains(code), "code block not found in:\n{html}");
    assert!(html.contains("<h3>Bootstrapping</h3>"));
}

#[test]
fn blank_line_splits_vision_list() {
    let site = build();
    let html = site.page("vision.html");

    assert_eq!(html.matches("<ul>").count(), 2);
    assert!(html.contains(
        "<ul>\n<li>Own your data</li>\n<li>Run it anywhere</li>\n</ul>\n<ul>\n<li>Audit everything</li>\n</ul>"
    ));
    assert!(html.contains("open components &amp; open standards"));
}

#[test]
fn footer_from_fixture_config() {
    let site = build();
    let html = site.page("architecture.html");
    assert!(html.contains("<footer><p>Fixture Docs footer</p></footer>"));
}

#[test]
fn rebuild_is_byte_identical() {
    let first = build();
    let second = build();
    for name in ["index.html", "vision.html", "architecture.html", "project_proposal.html"] {
        assert_eq!(first.page(name), second.page(name), "{name} differs");
    }
}
