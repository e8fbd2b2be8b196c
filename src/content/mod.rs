//! Content loading: articles and the chapter/project index.
//!
//! All derived data is computed once at the start of a build and passed
//! explicitly to the renderers; nothing reads it from ambient state.

pub mod articles;
mod error;
pub mod projects;

pub use articles::{Article, ArticleSummary};
pub use error::ContentError;
pub use projects::{Chapter, ChapterIndex, ProjectSummary, Tier};

use crate::config::SiteConfig;
use anyhow::{Context, Result};

/// All derived site data, computed once per build and read-only after.
#[derive(Debug, Default)]
pub struct SiteData {
    pub articles: Vec<Article>,
    pub chapters: ChapterIndex,
}

impl SiteData {
    /// Load articles and the chapter index from the content directories.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let articles = articles::scan_articles(&config.content.articles)
            .context("Failed to scan articles")?;
        let chapters = projects::index_projects(&config.content.projects)
            .context("Failed to index chapter projects")?;

        Ok(Self { articles, chapters })
    }
}
