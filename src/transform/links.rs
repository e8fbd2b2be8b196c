//! Relative step-link rewriting.

use markdown::mdast::Node;
use regex::Regex;
use std::sync::LazyLock;

/// A relative link to a numbered step file, e.g. `./01-step-one`.
static STEP_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\./\d{2}").unwrap());

/// Rewrite numbered step links to absolute repository URLs.
///
/// Every link whose target matches `^\./\d{2}` becomes
/// `{base}/{rel_dir}/{original}`, where `base` is the repository tree
/// URL and `rel_dir` the document's directory relative to the projects
/// root. Recurses depth-first over the entire tree and mutates it in
/// place; all other links are left alone.
pub fn rewrite_step_links(node: &mut Node, base: &str, rel_dir: &str) {
    if let Node::Link(link) = node
        && STEP_LINK.is_match(&link.url)
    {
        link.url = format!("{base}/{rel_dir}/{}", link.url);
    }

    if let Some(children) = node.children_mut() {
        for child in children {
            rewrite_step_links(child, base, rel_dir);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::parse_document;

    const BASE: &str = "https://github.com/example/projects/tree/main";

    fn collect_urls(node: &Node, urls: &mut Vec<String>) {
        if let Node::Link(link) = node {
            urls.push(link.url.clone());
        }
        if let Some(children) = node.children() {
            for child in children {
                collect_urls(child, urls);
            }
        }
    }

    fn rewritten_urls(source: &str, rel_dir: &str) -> Vec<String> {
        let mut tree = parse_document(source).unwrap();
        rewrite_step_links(&mut tree, BASE, rel_dir);
        let mut urls = Vec::new();
        collect_urls(&tree, &mut urls);
        urls
    }

    #[test]
    fn test_rewrites_numbered_step_link() {
        let urls = rewritten_urls("See [step one](./01-step-one).\n", "chapterX/projectY");
        assert_eq!(
            urls,
            vec![format!("{BASE}/chapterX/projectY/./01-step-one")]
        );
    }

    #[test]
    fn test_leaves_absolute_links_alone() {
        let urls = rewritten_urls(
            "See [docs](https://example.com/docs) for more.\n",
            "chapterX/projectY",
        );
        assert_eq!(urls, vec!["https://example.com/docs".to_string()]);
    }

    #[test]
    fn test_leaves_unnumbered_relative_links_alone() {
        let urls = rewritten_urls("See [notes](./notes.md).\n", "chapterX/projectY");
        assert_eq!(urls, vec!["./notes.md".to_string()]);
    }

    #[test]
    fn test_rewrites_links_nested_in_lists() {
        let source = "\
- first: [step one](./01-step-one)
- second: [step two](./02-step-two)
";
        let urls = rewritten_urls(source, "functions/callbacks");
        assert_eq!(
            urls,
            vec![
                format!("{BASE}/functions/callbacks/./01-step-one"),
                format!("{BASE}/functions/callbacks/./02-step-two"),
            ]
        );
    }

    #[test]
    fn test_single_digit_prefix_is_not_a_step() {
        let urls = rewritten_urls("See [one](./1-one).\n", "chapterX/projectY");
        assert_eq!(urls, vec!["./1-one".to_string()]);
    }
}
