//! Markdown document rendering: mdast tree to HTML.
//!
//! Covers the block and inline node kinds the content actually uses;
//! anything unrecognized falls back to rendering its children.

use markdown::mdast::Node;
use std::borrow::Cow;
use std::fmt::Write;

/// Render a parsed document tree to an HTML fragment.
pub fn render_document(node: &Node) -> String {
    let mut out = String::new();
    render_node(node, &mut out);
    out
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Root(root) => render_children(&root.children, out),
        Node::Heading(heading) => {
            let depth = heading.depth.clamp(1, 6);
            write!(out, "<h{depth}>").ok();
            render_children(&heading.children, out);
            writeln!(out, "</h{depth}>").ok();
        }
        Node::Paragraph(paragraph) => {
            out.push_str("<p>");
            render_children(&paragraph.children, out);
            out.push_str("</p>\n");
        }
        Node::Text(text) => out.push_str(&html_escape(&text.value)),
        Node::Emphasis(emphasis) => {
            out.push_str("<em>");
            render_children(&emphasis.children, out);
            out.push_str("</em>");
        }
        Node::Strong(strong) => {
            out.push_str("<strong>");
            render_children(&strong.children, out);
            out.push_str("</strong>");
        }
        Node::Delete(delete) => {
            out.push_str("<del>");
            render_children(&delete.children, out);
            out.push_str("</del>");
        }
        Node::InlineCode(code) => {
            write!(out, "<code>{}</code>", html_escape(&code.value)).ok();
        }
        Node::Code(code) => {
            match code.lang.as_deref() {
                Some(lang) => {
                    write!(out, "<pre><code class=\"language-{}\">", html_escape(lang)).ok()
                }
                None => write!(out, "<pre><code>").ok(),
            };
            out.push_str(&html_escape(&code.value));
            out.push_str("\n</code></pre>\n");
        }
        Node::Link(link) => {
            write!(out, "<a href=\"{}\">", html_escape(&link.url)).ok();
            render_children(&link.children, out);
            out.push_str("</a>");
        }
        Node::Image(image) => {
            write!(
                out,
                "<img src=\"{}\" alt=\"{}\"/>",
                html_escape(&image.url),
                html_escape(&image.alt)
            )
            .ok();
        }
        Node::List(list) => {
            let tag = if list.ordered { "ol" } else { "ul" };
            match list.start {
                Some(start) if list.ordered && start != 1 => {
                    writeln!(out, "<{tag} start=\"{start}\">").ok()
                }
                _ => writeln!(out, "<{tag}>").ok(),
            };
            render_children(&list.children, out);
            writeln!(out, "</{tag}>").ok();
        }
        Node::ListItem(item) => {
            out.push_str("<li>");
            render_children(&item.children, out);
            out.push_str("</li>\n");
        }
        Node::Blockquote(quote) => {
            out.push_str("<blockquote>\n");
            render_children(&quote.children, out);
            out.push_str("</blockquote>\n");
        }
        Node::ThematicBreak(_) => out.push_str("<hr/>\n"),
        Node::Break(_) => out.push_str("<br/>\n"),
        Node::Html(html) => {
            out.push_str(&html.value);
            out.push('\n');
        }
        other => {
            if let Some(children) = other.children() {
                render_children(children, out);
            }
        }
    }
}

fn render_children(children: &[Node], out: &mut String) {
    for child in children {
        render_node(child, out);
    }
}

/// Escape HTML special characters.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn html_escape(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

// ============================================================================
// Tests
// ============================================================================
