//! HTML escaping for text inserted into markup.

/// Escape `& < > " '` so the value is inert inside element content and
/// quoted attributes. `None` renders as the empty string.
pub fn escape_html(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
