//! `[repo]` section configuration.
//!
//! The external repository holding the per-chapter project code. The
//! content-injection transform uses these fields to rewrite step links
//! and to render the cloned-repository setup instructions.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[repo]` section in folio.toml.
///
/// # Example
/// ```toml
/// [repo]
/// url = "https://github.com/example/projects"
/// branch = "main"
/// clone_dir = "learning-rust-projects"
/// install_command = "cargo fetch"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RepoConfig {
    /// Repository URL (without a trailing slash).
    #[serde(default)]
    pub url: String,

    /// Branch used for absolute step links.
    #[serde(default = "defaults::repo::branch")]
    #[educe(Default = defaults::repo::branch())]
    pub branch: String,

    /// Local directory name suggested in the clone instructions.
    #[serde(default = "defaults::repo::clone_dir")]
    #[educe(Default = defaults::repo::clone_dir())]
    pub clone_dir: String,

    /// Command run after cloning in the setup instructions.
    #[serde(default = "defaults::repo::install_command")]
    #[educe(Default = defaults::repo::install_command())]
    pub install_command: String,
}

impl RepoConfig {
    /// Base URL for absolute step links: `{url}/tree/{branch}`.
    pub fn tree_url(&self) -> String {
        format!("{}/tree/{}", self.url.trim_end_matches('/'), self.branch)
    }
}
