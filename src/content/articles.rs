//! Article metadata extraction.
//!
//! Articles are Markdown files carrying a structured YAML front matter
//! prologue delimited by `---` lines:
//!
//! ```markdown
//! ---
//! date: "2023-06-01"
//! description: "Why the borrow checker says no."
//! slug: "borrow-checker-says-no"
//! tags: "ownership, borrowing"
//! title: "The Borrow Checker Says No"
//! ---
//!
//! Article body...
//! ```
//!
//! All five fields are required. A missing prologue or a missing field
//! aborts the build with an error naming the field and the document.

use super::error::ContentError;
use anyhow::Result;
use chrono::NaiveDate;
use gray_matter::{Matter, engine::YAML};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Article metadata extracted from the front matter prologue.
///
/// Immutable once constructed; ordering key is `date`, descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    /// Publication date, the sort key.
    pub date: NaiveDate,
    /// One-line description for listings and meta tags.
    pub description: String,
    /// Short link slug, the article's directory name in the output.
    pub slug: String,
    /// Display string of tags (not split further).
    pub tags: String,
    /// Article title.
    pub title: String,
}

/// A parsed article: summary plus the Markdown body below the prologue.
#[derive(Debug, Clone)]
pub struct Article {
    pub summary: ArticleSummary,
    pub body: String,
}

/// Front matter fields as they appear on disk, all optional so that a
/// missing field can be reported by name instead of as a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontMatter {
    date: Option<String>,
    description: Option<String>,
    slug: Option<String>,
    tags: Option<String>,
    title: Option<String>,
}

/// Scan the articles directory and extract a summary per document.
///
/// Discovery order is the sorted path order, so rebuilds are
/// deterministic. The result is sorted by date descending with a stable
/// sort; ties keep discovery order. An empty directory yields an empty
/// vector without error.
pub fn scan_articles(dir: &Path) -> Result<Vec<Article>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .map(|e| e.into_path())
        .collect();
    paths.sort();

    let mut articles = paths
        .iter()
        .map(|path| read_article(path))
        .collect::<Result<Vec<_>>>()?;

    // Stable sort: equal dates keep discovery order
    articles.sort_by(|a, b| b.summary.date.cmp(&a.summary.date));

    Ok(articles)
}

/// Parse one article document: front matter prologue plus body.
fn read_article(path: &Path) -> Result<Article> {
    let source =
        fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;

    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<RawFrontMatter>(&source)
        .ok_or_else(|| ContentError::MissingFrontMatter {
            path: path.to_path_buf(),
        })?;

    let raw = parsed.data;
    let date_str = require(raw.date, "date", path)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|source| {
        ContentError::InvalidDate {
            value: date_str,
            path: path.to_path_buf(),
            source,
        }
    })?;

    let summary = ArticleSummary {
        date,
        description: require(raw.description, "description", path)?,
        slug: require(raw.slug, "slug", path)?,
        tags: require(raw.tags, "tags", path)?,
        title: require(raw.title, "title", path)?,
    };

    Ok(Article {
        summary,
        body: parsed.content,
    })
}

/// Unwrap a front matter field or fail naming the field and document.
fn require(field: Option<String>, name: &'static str, path: &Path) -> Result<String> {
    field.ok_or_else(|| {
        ContentError::MissingField {
            field: name,
            path: path.to_path_buf(),
        }
        .into()
    })
}

// ============================================================================
// Tests
// ============================================================================
