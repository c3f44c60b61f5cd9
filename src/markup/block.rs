//! Block-level parsing.
//!
//! The parser walks the escaped document one line at a time. Each line is
//! tested against the block rules in a fixed priority order and the first
//! rule that matches emits its HTML:
//!
//! ```text
//! fence > code body > table row > heading > blockquote > list item > blank > paragraph
//! ```
//!
//! ## State
//!
//! Three flags in `BlockState` remember which block is still open:
//!
//! - `in_code_block`: between two fence lines. Table detection and every
//!   later rule are skipped; lines are copied through verbatim.
//! - `in_table`: after a row starting with `|`. The first row is the header,
//!   rows containing `---` are separators and vanish. Any other line closes
//!   the table before being classified.
//! - `in_list`: after a `* ` or `- ` item. A line that reaches the list rule
//!   without matching it closes the list. Headings, fences and table rows are
//!   handled before the list rule, so they appear inside an open list without
//!   closing it; a blank line does close it.
//!
//! At end of input an open list or table is closed. An unterminated fence
//! leaves its `<pre>` open.
//!
//! ## Input
//!
//! The input must already be escaped (see [`super::escape`]). The blockquote
//! rule tests for a literal `> `, which escaping has already turned into
//! `&gt; `, so a quote line in the source reaches the list and paragraph rules
//! instead: it closes an open list and renders as `<p>&gt; ...</p>`.

use super::inline::parse_inline;

const FENCE: &str = "```";
const QUOTE_MARKER: &str = "> ";
const BULLETS: [&str; 2] = ["* ", "- "];
const TABLE_SEPARATOR: &str = "---";

/// Open-block flags carried from one line to the next.
#[derive(Debug, Default)]
struct BlockState {
    in_list: bool,
    in_code_block: bool,
    in_table: bool,
}

/// Convert an escaped document into block-level HTML.
///
/// Output fragments are joined with `\n`.
pub fn parse_blocks(escaped: &str) -> String {
    let mut state = BlockState::default();
    let mut html: Vec<String> = Vec::new();

    for line in escaped.split('\n') {
        let trimmed = line.trim();

        if trimmed.starts_with(FENCE) {
            let tag = if state.in_code_block { "</pre>" } else { "<pre>" };
            html.push(tag.to_string());
            state.in_code_block = !state.in_code_block;
            continue;
        }

        if state.in_code_block {
            html.push(line.to_string());
            continue;
        }

        if trimmed.starts_with('|') {
            if !state.in_table {
                state.in_table = true;
                html.push("<table>".to_string());
                html.push("<thead><tr>".to_string());
                for cell in split_cells(trimmed) {
                    html.push(format!("<th>{}</th>", parse_inline(cell)));
                }
                html.push("</tr></thead><tbody>".to_string());
            } else if !trimmed.contains(TABLE_SEPARATOR) {
                html.push("<tr>".to_string());
                for cell in split_cells(trimmed) {
                    html.push(format!("<td>{}</td>", parse_inline(cell)));
                }
                html.push("</tr>".to_string());
            }
            continue;
        } else if state.in_table {
            html.push("</tbody></table>".to_string());
            state.in_table = false;
        }

        if let Some(heading) = render_heading(line) {
            html.push(heading);
            continue;
        }

        if let Some(quote) = line.strip_prefix(QUOTE_MARKER) {
            html.push(format!("<blockquote>{}</blockquote>", parse_inline(quote)));
            continue;
        }

        if let Some(item) = strip_bullet(trimmed) {
            if !state.in_list {
                html.push("<ul>".to_string());
                state.in_list = true;
            }
            html.push(format!("<li>{}</li>", parse_inline(item)));
            continue;
        } else if state.in_list {
            html.push("</ul>".to_string());
            state.in_list = false;
        }

        if trimmed.is_empty() {
            continue;
        }

        html.push(format!("<p>{}</p>", parse_inline(line)));
    }

    if state.in_list {
        html.push("</ul>".to_string());
    }
    if state.in_table {
        html.push("</tbody></table>".to_string());
    }

    html.join("\n")
}

/// Headings are matched on the untrimmed line and get no inline parsing.
fn render_heading(line: &str) -> Option<String> {
    if let Some(text) = line.strip_prefix("# ") {
        return Some(format!("<h1>{text}</h1>"));
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Some(format!("<h2>{text}</h2>"));
    }
    if let Some(text) = line.strip_prefix("### ") {
        return Some(format!("<h3>{text}</h3>"));
    }
    None
}

fn strip_bullet(trimmed: &str) -> Option<&str> {
    BULLETS
        .iter()
        .find_map(|bullet| trimmed.strip_prefix(*bullet))
}

/// Split a trimmed table row into trimmed cells.
///
/// All leading and trailing pipes are dropped before splitting, so
/// `| a | b |` and `a | b` give the same cells.
fn split_cells(row: &str) -> impl Iterator<Item = &str> {
    row.trim_matches('|').split('|').map(str::trim)
}
