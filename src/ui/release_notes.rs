/// Dark-theme styling for GitHub release notes
///
/// GitHub's API already returns rendered HTML (`body_html`); this only wraps
/// it in a stylesheet matching the application's dark theme.
///
/// `RELEASE_NOTES_CSS` is the stylesheet applied to release notes.
pub const RELEASE_NOTES_CSS: &str = concat!(
    // Base
    "body { ",
    "  font-family: 'Segoe UI', Arial, sans-serif; ",
    "  font-size: 11px; ",
    "  color: #CCCCCC; ",
    "  margin: 0; ",
    "  padding: 10px; ",
    "  background-color: #232323; ",
    "  line-height: 1.5; ",
    "}",
    // Headings
    "h1, h2, h3, h4, h5, h6 { color: #FFFFFF; margin-top: 16px; margin-bottom: 8px; }",
    "h1 { font-size: 18px; border-bottom: 1px solid #444444; padding-bottom: 6px; }",
    "h2 { font-size: 16px; border-bottom: 1px solid #3a3a3a; padding-bottom: 4px; }",
    "h3 { font-size: 14px; }",
    "h4 { font-size: 12px; }",
    "h5 { font-size: 11px; }",
    "h6 { font-size: 10px; color: #AAAAAA; }",
    // Paragraphs and lists
    "p { margin: 8px 0; line-height: 1.6; }",
    "ul, ol { margin: 8px 0; padding-left: 24px; }",
    "li { margin: 4px 0; line-height: 1.5; }",
    "li p { margin: 4px 0; }",
    // Inline code
    "code { ",
    "  background-color: #2d2d2d; ",
    "  color: #E8E8E8; ",
    "  padding: 2px 6px; ",
    "  border-radius: 4px; ",
    "  font-family: 'Consolas', 'Courier New', monospace; ",
    "  font-size: 10px; ",
    "}",
    // Code blocks
    "pre { ",
    "  background-color: #1e1e1e; ",
    "  padding: 12px; ",
    "  border-radius: 6px; ",
    "  overflow-x: auto; ",
    "  border: 1px solid #3d3d3d; ",
    "  margin: 10px 0; ",
    "}",
    "pre code { ",
    "  padding: 0; ",
    "  background-color: transparent; ",
    "  font-size: 10px; ",
    "}",
    // Links and text formatting
    "a { color: #4CAF50; text-decoration: none; }",
    "strong, b { color: #FFFFFF; font-weight: bold; }",
    "em, i { font-style: italic; color: #DDDDDD; }",
    "del, s { text-decoration: line-through; color: #888888; }",
    // Blockquotes
    "blockquote { ",
    "  border-left: 4px solid #4CAF50; ",
    "  margin: 12px 0; ",
    "  padding: 8px 16px; ",
    "  color: #AAAAAA; ",
    "  background-color: #2a2a2a; ",
    "}",
    "blockquote p { margin: 4px 0; }",
    // Horizontal rule
    "hr { ",
    "  border: none; ",
    "  border-top: 1px solid #444444; ",
    "  margin: 16px 0; ",
    "}",
    // Tables
    "table { ",
    "  border-collapse: collapse; ",
    "  margin: 12px 0; ",
    "  width: 100%; ",
    "  border: 1px solid #444444; ",
    "}",
    "th { ",
    "  background-color: #333333; ",
    "  color: #FFFFFF; ",
    "  font-weight: bold; ",
    "  padding: 8px 12px; ",
    "  text-align: left; ",
    "  border: 1px solid #444444; ",
    "}",
    "td { ",
    "  padding: 6px 12px; ",
    "  border: 1px solid #444444; ",
    "  background-color: #2a2a2a; ",
    "}",
    // Images
    "img { max-width: 100%; height: auto; border-radius: 4px; }",
);

/// Wrap rendered HTML in the dark-theme stylesheet.
///
/// Empty input stays empty. Anything else is embedded as-is, without
/// escaping, inside `<body>`.
pub fn wrap_html_with_style(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    format!(
        "<html><head><style>{}</style></head><body>{}</body></html>",
        RELEASE_NOTES_CSS, html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(wrap_html_with_style(""), "");
    }

    #[test]
    fn test_wraps_unescaped() {
        let body = "<h2>v1.2.0</h2><ul><li>Fix <code>&lt;tag&gt;</code></li></ul>";
        let styled = wrap_html_with_style(body);

        assert!(styled.starts_with("<html><head><style>body { "));
        assert!(styled.ends_with(&format!("</style></head><body>{}</body></html>", body)));
        assert_eq!(styled.matches(body).count(), 1);
    }

    #[test]
    fn test_stylesheet_is_dark() {
        assert!(RELEASE_NOTES_CSS.contains("background-color: #232323"));
        assert!(RELEASE_NOTES_CSS.contains("a { color: #4CAF50; text-decoration: none; }"));
        assert_eq!(RELEASE_NOTES_CSS.matches('{').count(), RELEASE_NOTES_CSS.matches('}').count());
    }
}
