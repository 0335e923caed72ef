use pulldown_cmark::{Options, Parser, html};

/// Render post markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Drop a leading `# Title` line when it repeats the page heading
pub fn strip_title_heading<'a>(markdown: &'a str, title: &str) -> &'a str {
    let trimmed = markdown.trim_start();
    let (first, rest) = trimmed.split_once('\n').unwrap_or((trimmed, ""));

    match first.strip_prefix("# ") {
        Some(heading) if heading.trim().eq_ignore_ascii_case(title.trim()) => rest.trim_start(),
        _ => markdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_markdown("## Heading\n\nSome **bold** text\n\n- one\n- two\n");
        assert!(html.contains("<h2>Heading</h2>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_render_code_block_is_escaped() {
        let html = render_markdown("```jsx\n<Image src=\"/hero.jpg\" />\n```\n");
        assert!(html.contains("<pre><code class=\"language-jsx\">"));
        assert!(html.contains("&lt;Image"));
    }

    #[test]
    fn test_render_tables_and_strikethrough() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~old~~\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>old</del>"));
    }

    #[test]
    fn test_strip_title_heading() {
        let md = "# Docker for Developers\n\nA practical guide";
        assert_eq!(strip_title_heading(md, "Docker for Developers"), "A practical guide");
        assert_eq!(strip_title_heading(md, "docker FOR developers"), "A practical guide");
    }

    #[test]
    fn test_strip_title_heading_keeps_other_content() {
        let md = "# Something Else\n\nBody";
        assert_eq!(strip_title_heading(md, "Docker"), md);

        let md = "## Docker\n\nBody";
        assert_eq!(strip_title_heading(md, "Docker"), md);

        assert_eq!(strip_title_heading("# Docker", "Docker"), "");
    }
}
