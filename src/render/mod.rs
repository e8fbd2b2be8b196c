//! Presentation layer: pure functions from site data to markup.
//!
//! Renderers never perform I/O and never touch shared state; everything
//! they need arrives as a parameter. `build` decides where the markup
//! is written.

pub mod document;
pub mod pages;

pub use document::render_document;

use crate::config::SiteConfig;
use document::html_escape;
use std::fmt::Write;

/// Render a complete HTML page: head, nav, the given main content, footer.
pub fn page(config: &SiteConfig, title: &str, main: &str) -> String {
    let mut out = String::new();
    let site_title = html_escape(&config.base.title);

    writeln!(out, "<!DOCTYPE html>").ok();
    writeln!(out, "<html lang=\"{}\">", html_escape(&config.base.language)).ok();
    writeln!(out, "<head>").ok();
    writeln!(out, "<meta charset=\"utf-8\"/>").ok();
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    )
    .ok();
    if !config.base.description.is_empty() {
        writeln!(
            out,
            "<meta name=\"description\" content=\"{}\"/>",
            html_escape(&config.base.description)
        )
        .ok();
    }
    if title.is_empty() {
        writeln!(out, "<title>{site_title}</title>").ok();
    } else {
        writeln!(out, "<title>{} | {site_title}</title>", html_escape(title)).ok();
    }
    writeln!(out, "</head>").ok();
    writeln!(out, "<body>").ok();

    render_nav(config, &mut out);
    writeln!(out, "<main>").ok();
    out.push_str(main);
    writeln!(out, "</main>").ok();
    render_footer(config, &mut out);

    writeln!(out, "</body>").ok();
    writeln!(out, "</html>").ok();
    out
}

fn render_nav(config: &SiteConfig, out: &mut String) {
    writeln!(out, "<nav>").ok();
    writeln!(
        out,
        "<a class=\"site-title\" href=\"/\">{}</a>",
        html_escape(&config.base.title)
    )
    .ok();
    for link in &config.nav {
        writeln!(
            out,
            "<a href=\"{}\">{}</a>",
            html_escape(&link.url),
            html_escape(&link.label)
        )
        .ok();
    }
    writeln!(out, "</nav>").ok();
}

fn render_footer(config: &SiteConfig, out: &mut String) {
    writeln!(out, "<footer>").ok();
    if !config.social.is_empty() {
        writeln!(out, "<ul class=\"social\">").ok();
        for link in &config.social {
            writeln!(
                out,
                "<li><a href=\"{}\">{}</a></li>",
                html_escape(&link.url),
                html_escape(&link.label)
            )
            .ok();
        }
        writeln!(out, "</ul>").ok();
    }
    writeln!(out, "</footer>").ok();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::from_str(
            r#"
            [base]
            title = "Learning Rust"
            description = "Articles on Rust"
            language = "en-US"

            [[nav]]
            label = "Articles"
            url = "/articles"

            [[social]]
            label = "GitHub"
            url = "https://github.com/example"
        "#,
        )
        .unwrap()
    }

    #[test]
    fn test_page_shell() {
        let html = page(&config(), "Articles", "<p>hello</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en-US\">"));
        assert!(html.contains("<title>Articles | Learning Rust</title>"));
        assert!(html.contains("<a href=\"/articles\">Articles</a>"));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("<a href=\"https://github.com/example\">GitHub</a>"));
    }

    #[test]
    fn test_page_home_title() {
        let html = page(&config(), "", "<p>hero</p>");
        assert!(html.contains("<title>Learning Rust</title>"));
    }

    #[test]
    fn test_page_escapes_title() {
        let html = page(&config(), "a < b", "");
        assert!(html.contains("a &lt; b | Learning Rust"));
    }
}
