//! `[content]` section configuration.
//!
//! Content directories and the output path. All paths are relative to the
//! site root in folio.toml and normalized to absolute paths at load time.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in folio.toml.
///
/// # Example
/// ```toml
/// [content]
/// articles = "content/articles"
/// projects = "content/projects"
/// output = "public"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Directory holding article documents with front matter.
    #[serde(default = "defaults::content::articles")]
    #[educe(Default = defaults::content::articles())]
    pub articles: PathBuf,

    /// Directory holding imported chapter/project documents.
    #[serde(default = "defaults::content::projects")]
    #[educe(Default = defaults::content::projects())]
    pub projects: PathBuf,

    /// Output directory for the generated site.
    #[serde(default = "defaults::content::output")]
    #[educe(Default = defaults::content::output())]
    pub output: PathBuf,
}
