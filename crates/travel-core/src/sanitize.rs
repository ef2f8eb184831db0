//! Post content sanitizer
//!
//! Blog bodies arrive as HTML from the content API and are injected as
//! markup, so they go through an allow-list first.

use ammonia::Builder;

/// Tags allowed on top of ammonia's defaults
const EXTRA_TAGS: &[&str] = &["figure", "figcaption"];

/// Strip everything but safe formatting markup from `html`
pub fn sanitize_html(html: &str) -> String {
    let mut builder = Builder::default();
    builder.add_tags(EXTRA_TAGS).link_rel(Some("noopener noreferrer nofollow"));
    builder.clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scripts_and_handlers() {
        let dirty = r#"<p onclick="steal()">Hi<script>alert(1)</script></p><img src="x.jpg" onerror="steal()">"#;
        let clean = sanitize_html(dirty);
        assert!(!clean.contains("script"));
        assert!(!clean.contains("onclick"));
        assert!(!clean.contains("onerror"));
        assert!(clean.contains("<p>Hi</p>"));
        assert!(clean.contains(r#"src="x.jpg""#));
    }

    #[test]
    fn test_keeps_formatting() {
        let html = "<h2>Day 1</h2><ul><li><strong>Axum</strong> obelisks</li></ul><figure><figcaption>Aksum</figcaption></figure>";
        assert_eq!(sanitize_html(html), html);
    }

    #[test]
    fn test_neutralises_javascript_links() {
        let clean = sanitize_html(r#"<a href="javascript:alert(1)">x</a><a href="https://visitethiopia.et">y</a>"#);
        assert!(!clean.contains("javascript:"));
        assert!(clean.contains(r#"href="https://visitethiopia.et""#));
        assert!(clean.contains("noopener"));
    }
}
