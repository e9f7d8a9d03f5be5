use ammonia::{Builder, UrlRelative};

/// Sanitizes rich-text HTML before it is stored, so templates may render it unescaped.
pub fn sanitize_rich_text(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .clean(content)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_are_removed() {
        let cleaned = sanitize_rich_text("<p>Hi</p><script>alert('x')</script>");
        assert_eq!(cleaned, "<p>Hi</p>");
    }

    #[test]
    fn event_handlers_are_stripped() {
        let cleaned = sanitize_rich_text(r#"<img src="/media/blog/a.png" onerror="alert(1)">"#);
        assert!(cleaned.contains(r#"src="/media/blog/a.png""#));
        assert!(!cleaned.contains("onerror"));
    }

    #[test]
    fn links_get_safe_rel() {
        let cleaned = sanitize_rich_text(r#"<a href="https://example.com">x</a>"#);
        assert!(cleaned.contains(r#"rel="nofollow noopener noreferrer""#));
    }
}
