//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── SiteData::load() ──► scan_articles() + index_projects()
//!     │
//!     ├── prepare_output() ──► (optionally) clear the output directory
//!     │
//!     └── write pages:
//!             index.html
//!             articles/index.html, articles/<slug>/index.html
//!             projects/index.html, projects/<chapter>/<project>/index.html
//!             starters/index.html
//! ```
//!
//! Everything runs single-threaded at build time: file reads complete
//! before any dependent computation starts, and the derived `SiteData`
//! is read-only once loaded.

use crate::{
    config::SiteConfig,
    content::{ContentError, ProjectSummary, SiteData},
    log,
    render::pages,
    transform,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Build the entire site into the output directory.
///
/// Any content error (missing metadata, unknown chapter) aborts the
/// build before anything is written.
pub fn build_site(config: &'static SiteConfig) -> Result<()> {
    let data = load_data(config)?;

    let clear = config.cli.is_some_and(|cli| cli.clear_output());
    prepare_output(&config.content.output, clear)?;

    write_fixed_pages(config, &data)?;
    write_article_pages(config, &data)?;
    write_project_pages(config, &data)?;

    log!("build"; "done");
    Ok(())
}

/// Load and validate all content without writing output.
pub fn check_site(config: &'static SiteConfig) -> Result<()> {
    load_data(config)?;
    log!("check"; "ok");
    Ok(())
}

/// Load the derived site data and log what was found.
fn load_data(config: &SiteConfig) -> Result<SiteData> {
    let data = SiteData::load(config)?;
    log!("articles"; "found {}", data.articles.len());
    log!("projects"; "found {} chapters, {} projects",
        data.chapters.len(),
        data.chapters.project_count());
    Ok(data)
}

/// Ensure the output directory exists, clearing it first if requested.
fn prepare_output(output: &Path, clear: bool) -> Result<()> {
    if clear && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    Ok(())
}

fn write_fixed_pages(config: &SiteConfig, data: &SiteData) -> Result<()> {
    let output = &config.content.output;

    write_page(&output.join("index.html"), &pages::home_page(config, data))?;
    write_page(
        &output.join("articles").join("index.html"),
        &pages::articles_page(config, &data.articles),
    )?;
    write_page(
        &output.join("projects").join("index.html"),
        &pages::projects_page(config, &data.chapters),
    )?;
    write_page(
        &output.join("starters").join("index.html"),
        &pages::starters_page(config),
    )?;

    Ok(())
}

fn write_article_pages(config: &SiteConfig, data: &SiteData) -> Result<()> {
    let articles_out = config.content.output.join("articles");

    for article in &data.articles {
        let html = pages::article_page(config, article)
            .with_context(|| format!("Failed to render article `{}`", article.summary.slug))?;
        write_page(
            &articles_out.join(&article.summary.slug).join("index.html"),
            &html,
        )?;
    }

    Ok(())
}

fn write_project_pages(config: &SiteConfig, data: &SiteData) -> Result<()> {
    let projects_out = config.content.output.join("projects");

    for (chapter_id, chapter) in data.chapters.iter() {
        for project in &chapter.projects {
            let html = render_project(config, project)
                .with_context(|| format!("Failed to render project `{}`", project.path.display()))?;
            write_page(
                &projects_out
                    .join(chapter_id)
                    .join(&project.slug)
                    .join("index.html"),
                &html,
            )?;
        }
    }

    Ok(())
}

/// Read one project document, apply the transforms, render its page.
fn render_project(config: &SiteConfig, project: &ProjectSummary) -> Result<String> {
    let source_path = config.content.projects.join(&project.path);
    let source = fs::read_to_string(&source_path)
        .map_err(|err| ContentError::Io(source_path.clone(), err))?;

    let rel_dir = project
        .path
        .parent()
        .unwrap_or(Path::new(""))
        .to_string_lossy()
        .replace('\\', "/");

    let tree = transform::prepare_project_document(&source, &rel_dir, &config.repo)?;
    Ok(pages::project_page(config, project, &tree))
}

/// Write one page, creating parent directories as needed.
fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write page: {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
