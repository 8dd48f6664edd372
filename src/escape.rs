//! HTML escaping for values interpolated into label documents.
//!
//! Installed as the Tera escape function (see `templates::init_templates`), so
//! every `{{ value }}` in a label template goes through it.

/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities. Everything else passes
/// through unchanged.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_leaves_other_text_alone() {
        assert_eq!(escape_html("123 Main St / Unit #4"), "123 Main St / Unit #4");
        assert_eq!(escape_html("Montréal"), "Montréal");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
