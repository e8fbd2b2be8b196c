//! Setup-section content injection.
//!
//! Imported project documents carry a `## Setup` heading but not the
//! repository clone instructions, since those are identical for every
//! project. This module splices the canned instructions in at build
//! time, right after the `Setup` heading, plus a terminal-directory
//! note right before the `Steps` heading.

use crate::config::RepoConfig;
use anyhow::Result;
use markdown::mdast::Node;

/// Heading that receives the clone instructions.
const SETUP_HEADING: &str = "Setup";

/// Heading that receives the terminal note in front of it.
const STEPS_HEADING: &str = "Steps";

/// Leading text of the injected clone paragraph, used to detect a
/// document that was already injected.
const INJECTED_MARKER: &str = "If you haven't yet, set up the";

/// Splice setup instructions into the document's `Setup` section.
///
/// Mutates the tree in place. A document without a `Setup` heading is
/// left untouched (a defined no-op, not an error), as is a document
/// that already carries the injected instructions; the transform is
/// therefore idempotent. The terminal note is only added when a
/// `Steps` heading exists.
pub fn inject_setup(root: &mut Node, chapter: &str, project: &str, repo: &RepoConfig) -> Result<()> {
    let Node::Root(root) = root else {
        return Ok(());
    };

    let Some(setup_idx) = find_heading(&root.children, SETUP_HEADING) else {
        return Ok(());
    };

    if already_injected(root.children.get(setup_idx + 1)) {
        return Ok(());
    }

    let setup_block = parse_fragment(&setup_fragment(repo, chapter, project))?;
    let note_block = parse_fragment(&note_fragment(project))?;

    // Insert in back-to-front order so earlier indices stay valid
    if let Some(steps_idx) = find_heading(&root.children, STEPS_HEADING)
        && steps_idx > setup_idx
    {
        splice_in(&mut root.children, steps_idx, note_block);
    }
    splice_in(&mut root.children, setup_idx + 1, setup_block);

    Ok(())
}

/// Insert a block of nodes at `index`, preserving all other content order.
fn splice_in(children: &mut Vec<Node>, index: usize, block: Vec<Node>) {
    let tail = children.split_off(index);
    children.extend(block);
    children.extend(tail);
}

/// Index of the first heading whose literal text equals `label`.
///
/// A heading with no text child never matches.
fn find_heading(children: &[Node], label: &str) -> Option<usize> {
    children.iter().position(|child| {
        matches!(child, Node::Heading(heading)
            if matches!(heading.children.first(), Some(Node::Text(text)) if text.value == label))
    })
}

/// Whether the node after the `Setup` heading is the injected paragraph.
fn already_injected(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Paragraph(paragraph))
        if matches!(paragraph.children.first(), Some(Node::Text(text)) if text.value.starts_with(INJECTED_MARKER)))
}

/// Parse a Markdown fragment to its top-level nodes.
fn parse_fragment(source: &str) -> Result<Vec<Node>> {
    let tree = super::parse_document(source)?;
    match tree {
        Node::Root(root) => Ok(root.children),
        other => Ok(vec![other]),
    }
}

/// The clone/open-editor instruction block spliced after `Setup`.
fn setup_fragment(repo: &RepoConfig, chapter: &str, project: &str) -> String {
    let url = repo.url.trim_end_matches('/');
    let clone_dir = &repo.clone_dir;

    let mut shell = format!("git clone {url} {clone_dir}\ncd {clone_dir}");
    if !repo.install_command.is_empty() {
        shell.push('\n');
        shell.push_str(&repo.install_command);
    }

    format!(
        "{INJECTED_MARKER} [{url}]({url}) repository locally.\n\
         \n\
         ```shell\n\
         {shell}\n\
         ```\n\
         \n\
         Open your editor in this project's directory:\n\
         \n\
         ```shell\n\
         cd {chapter}/{project}\n\
         ```\n"
    )
}

/// The terminal-directory note spliced before `Steps`.
fn note_fragment(project: &str) -> String {
    format!(
        "> Note: your terminal should be in the `{project}` directory, \
         _not_ the repository root.\n"
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::transform::parse_document;

    const SOURCE: &str = "\
# Callbacks

This is a starter project.

## Setup

## Steps

1. Do the first thing.
";

    fn repo() -> RepoConfig {
        let config: SiteConfig = SiteConfig::from_str(
            r#"
            [repo]
            url = "https://github.com/example/projects"
            clone_dir = "book-projects"
            install_command = "cargo fetch"
        "#,
        )
        .unwrap();
        config.repo
    }

    fn inject(source: &str) -> Node {
        let mut tree = parse_document(source).unwrap();
        inject_setup(&mut tree, "functions", "callbacks", &repo()).unwrap();
        tree
    }

    fn top_level(tree: &Node) -> &[Node] {
        match tree {
            Node::Root(root) => &root.children,
            _ => panic!("expected root"),
        }
    }

    #[test]
    fn test_injects_after_setup_heading() {
        let tree = inject(SOURCE);
        let children = top_level(&tree);

        let setup_idx = find_heading(children, SETUP_HEADING).unwrap();
        assert!(already_injected(children.get(setup_idx + 1)));

        let debug = format!("{tree:?}");
        assert!(debug.contains("git clone https://github.com/example/projects book-projects"));
        assert!(debug.contains("cargo fetch"));
        assert!(debug.contains("cd functions/callbacks"));
    }

    #[test]
    fn test_injects_note_before_steps_heading() {
        let tree = inject(SOURCE);
        let children = top_level(&tree);

        let steps_idx = find_heading(children, STEPS_HEADING).unwrap();
        // The node before the Steps heading is the blockquote note
        assert!(matches!(&children[steps_idx - 1], Node::Blockquote(_)));

        let debug = format!("{tree:?}");
        assert!(debug.contains("your terminal should be in the "));
        assert!(debug.contains("callbacks"));
    }

    #[test]
    fn test_without_setup_heading_is_noop() {
        let source = "# Callbacks\n\nNothing to set up.\n";
        let tree = inject(source);
        let untouched = parse_document(source).unwrap();

        assert_eq!(format!("{tree:?}"), format!("{untouched:?}"));
    }

    #[test]
    fn test_noop_is_idempotent() {
        let source = "# Callbacks\n\nNothing to set up.\n";
        let mut tree = parse_document(source).unwrap();
        inject_setup(&mut tree, "functions", "callbacks", &repo()).unwrap();
        let once = format!("{tree:?}");
        inject_setup(&mut tree, "functions", "callbacks", &repo()).unwrap();

        assert_eq!(once, format!("{tree:?}"));
    }

    #[test]
    fn test_double_injection_is_guarded() {
        let mut tree = parse_document(SOURCE).unwrap();
        inject_setup(&mut tree, "functions", "callbacks", &repo()).unwrap();
        let once = format!("{tree:?}");
        inject_setup(&mut tree, "functions", "callbacks", &repo()).unwrap();

        assert_eq!(once, format!("{tree:?}"));
    }

    #[test]
    fn test_missing_steps_heading_skips_note() {
        let source = "# Callbacks\n\n## Setup\n\nSome manual setup.\n";
        let tree = inject(source);
        let debug = format!("{tree:?}");

        assert!(debug.contains("git clone"));
        assert!(!debug.contains("your terminal should be in the "));
    }

    #[test]
    fn test_install_command_is_optional() {
        let mut repo = repo();
        repo.install_command = String::new();

        let mut tree = parse_document(SOURCE).unwrap();
        inject_setup(&mut tree, "functions", "callbacks", &repo).unwrap();
        let debug = format!("{tree:?}");

        assert!(debug.contains("git clone"));
        assert!(!debug.contains("cargo fetch"));
    }
}
