//! Markdown-tree transforms for imported project documents.
//!
//! Project pages are imported verbatim from the external projects
//! repository, so their relative step links and missing setup
//! instructions have to be fixed up at build time:
//!
//! 1. [`rewrite_step_links`] turns numbered relative links
//!    (`./01-step-one`) into absolute repository URLs.
//! 2. [`inject_setup`] splices clone/setup instructions into the
//!    document's `Setup` section.
//!
//! Both steps mutate the passed-in mdast tree in place.

mod inject;
mod links;

pub use inject::inject_setup;
pub use links::rewrite_step_links;

use crate::config::RepoConfig;
use anyhow::{Result, anyhow};
use markdown::{ParseOptions, mdast::Node, to_mdast};

/// Parse a project document and apply both transform steps.
///
/// `rel_dir` is the document's directory relative to the projects root
/// (e.g. `functions/callbacks`); its last two segments name the chapter
/// and the project.
pub fn prepare_project_document(source: &str, rel_dir: &str, repo: &RepoConfig) -> Result<Node> {
    let mut tree = parse_document(source)?;

    rewrite_step_links(&mut tree, &repo.tree_url(), rel_dir);

    let mut segments = rel_dir.rsplit('/');
    let project = segments.next().unwrap_or_default();
    let chapter = segments.next().unwrap_or_default();
    inject_setup(&mut tree, chapter, project, repo)?;

    Ok(tree)
}

/// Parse Markdown to an mdast tree (GFM enabled).
pub fn parse_document(source: &str) -> Result<Node> {
    to_mdast(source, &ParseOptions::gfm()).map_err(|m| anyhow!("Markdown parse error: {m}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn repo() -> RepoConfig {
        let config: SiteConfig = SiteConfig::from_str(
            r#"
            [repo]
            url = "https://github.com/example/projects"
            branch = "main"
            clone_dir = "book-projects"
            install_command = "cargo fetch"
        "#,
        )
        .unwrap();
        config.repo
    }

    #[test]
    fn test_prepare_applies_both_steps() {
        let source = "\
# Callbacks

This is a starter project.

See [step one](./01-step-one).

## Setup

## Steps

Do the thing.
";
        let tree =
            prepare_project_document(source, "functions/callbacks", &repo()).unwrap();
        let debug = format!("{tree:?}");

        assert!(debug.contains(
            "https://github.com/example/projects/tree/main/functions/callbacks/./01-step-one"
        ));
        assert!(debug.contains("git clone https://github.com/example/projects book-projects"));
        assert!(debug.contains("cd functions/callbacks"));
    }

    #[test]
    fn test_prepare_without_setup_is_untouched() {
        let source = "# Callbacks\n\nNo setup section here.\n";
        let once = prepare_project_document(source, "functions/callbacks", &repo()).unwrap();
        let direct = parse_document(source).unwrap();

        assert_eq!(format!("{once:?}"), format!("{direct:?}"));
    }
}
