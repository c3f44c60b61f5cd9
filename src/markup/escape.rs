//! HTML escaping of raw document text.

/// Escape `&`, `<` and `>` in that order.
///
/// `&` goes first so the entities introduced for `<` and `>` are not escaped
/// again. Code blocks get no exemption; their contents are escaped too.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
