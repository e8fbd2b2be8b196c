//! Chapter/project indexing.
//!
//! The projects directory mirrors the external repository layout:
//!
//! ```text
//! projects/
//! ├── functions/
//! │   ├── README.md            <- registers the "functions" chapter
//! │   └── callbacks/
//! │       └── README.md        <- registers the "callbacks" project
//! └── generics/
//!     └── ...
//! ```
//!
//! A `chapter/README.md` (one directory segment) declares a chapter; a
//! `chapter/project/README.md` (two segments) declares a project inside
//! it. A project whose chapter has no README is a fatal error.

use super::error::ContentError;
use anyhow::Result;
use regex::Regex;
use std::{
    collections::BTreeMap,
    fmt, fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use walkdir::WalkDir;

/// Leading `# ` heading of a document, used as the display name.
static LEADING_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+?)\s*$").unwrap());

/// First tier word in a document body.
static TIER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(starter|standard|advanced)\b").unwrap());

// ============================================================================
// Types
// ============================================================================

/// Project difficulty tier, in rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Starter,
    Standard,
    Advanced,
}

impl Tier {
    /// Rank used for ordering within a chapter (starter=0 < standard=1 < advanced=2).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Starter => 0,
            Self::Standard => 1,
            Self::Advanced => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Standard => "standard",
            Self::Advanced => "advanced",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "starter" => Some(Self::Starter),
            "standard" => Some(Self::Standard),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One project inside a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Difficulty tier, the primary sort key.
    pub tier: Tier,
    /// Display name from the leading heading, the secondary sort key.
    pub name: String,
    /// Directory name, used in output URLs.
    pub slug: String,
    /// Document path relative to the projects root.
    pub path: PathBuf,
}

/// One chapter: display title plus its ordered projects.
#[derive(Debug, Clone, Default)]
pub struct Chapter {
    pub title: String,
    pub projects: Vec<ProjectSummary>,
}

/// Mapping from chapter identifier (directory name) to its projects.
///
/// Built once per site build and read-only afterward. Iteration order is
/// the lexicographic directory order, so rebuilds are deterministic.
#[derive(Debug, Clone, Default)]
pub struct ChapterIndex {
    chapters: BTreeMap<String, Chapter>,
}

impl ChapterIndex {
    pub fn get(&self, id: &str) -> Option<&Chapter> {
        self.chapters.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Chapter)> {
        self.chapters.iter()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Total number of projects across all chapters.
    pub fn project_count(&self) -> usize {
        self.chapters.values().map(|c| c.projects.len()).sum()
    }
}

// ============================================================================
// Indexing
// ============================================================================

/// Walk the projects directory and build the chapter index.
///
/// Chapters are registered in a first pass, projects in a second, so the
/// result does not depend on filesystem enumeration order. Each chapter's
/// project list is sorted by tier rank, then by name, lexicographic.
pub fn index_projects(dir: &Path) -> Result<ChapterIndex> {
    let mut readmes: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name() == std::ffi::OsStr::new("README.md"))
        .map(|e| e.into_path())
        .collect();
    readmes.sort();

    let mut chapters = BTreeMap::new();

    // First pass: chapter READMEs (one directory segment)
    for path in &readmes {
        let rel = relative_to(path, dir)?;
        if rel.components().count() != 2 {
            continue;
        }
        let id = directory_name(&rel)?;
        let source = read_source(path)?;
        chapters.insert(
            id,
            Chapter {
                title: leading_heading(&source, path)?,
                projects: Vec::new(),
            },
        );
    }

    // Second pass: project READMEs (two directory segments)
    for path in &readmes {
        let rel = relative_to(path, dir)?;
        if rel.components().count() != 3 {
            continue;
        }

        let mut components = rel.components();
        let chapter_id = component_str(components.next())?;
        let slug = component_str(components.next())?;

        let source = read_source(path)?;
        let project = ProjectSummary {
            tier: tier_of(&source, path)?,
            name: leading_heading(&source, path)?,
            slug,
            path: rel.clone(),
        };

        let Some(chapter) = chapters.get_mut(&chapter_id) else {
            return Err(ContentError::UnknownChapter {
                chapter: chapter_id,
                project: rel,
            }
            .into());
        };
        chapter.projects.push(project);
    }

    for chapter in chapters.values_mut() {
        chapter
            .projects
            .sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.name.cmp(&b.name)));
    }

    Ok(ChapterIndex { chapters })
}

// ============================================================================
// Helper Functions
// ============================================================================

fn read_source(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?)
}

fn relative_to(path: &Path, root: &Path) -> Result<PathBuf> {
    Ok(path
        .strip_prefix(root)
        .map_err(|_| ContentError::Io(path.to_path_buf(), std::io::Error::other("outside root")))?
        .to_path_buf())
}

fn directory_name(rel: &Path) -> Result<String> {
    component_str(rel.components().next())
}

fn component_str(component: Option<std::path::Component<'_>>) -> Result<String> {
    component
        .and_then(|c| c.as_os_str().to_str())
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))
}

/// Extract the document's leading `# ` heading text.
fn leading_heading(source: &str, path: &Path) -> Result<String> {
    LEADING_HEADING
        .captures(source)
        .map(|captures| captures[1].to_owned())
        .ok_or_else(|| {
            ContentError::MissingHeading {
                path: path.to_path_buf(),
            }
            .into()
        })
}

/// Extract the project's tier from the first tier word in the body.
fn tier_of(source: &str, path: &Path) -> Result<Tier> {
    TIER_WORD
        .captures(source)
        .and_then(|captures| Tier::from_word(&captures[1]))
        .ok_or_else(|| {
            ContentError::MissingTier {
                path: path.to_path_buf(),
            }
            .into()
        })
}

// ============================================================================
// Tests
// ============================================================================
