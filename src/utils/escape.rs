/// Escape text for safe inclusion in HTML
///
/// The input is treated purely as text: markup in it is neutralized, never interpreted.
///
/// # Examples
///
/// ```
/// use thread_archive::escape_html;
///
/// assert_eq!(escape_html("<script>x & y</script>"), "&lt;script&gt;x &amp; y&lt;/script&gt;");
/// ```
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_html(r#"<a href="x" onclick='y'>"#),
            "&lt;a href=&quot;x&quot; onclick=&#x27;y&#x27;&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        // Already-escaped entities are escaped again rather than decoded
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_and_unicode_text_unchanged() {
        assert_eq!(escape_html("hello 👋 @world #tag"), "hello 👋 @world #tag");
        assert_eq!(escape_html(""), "");
    }
}
