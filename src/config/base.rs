//! `[base]` section configuration.
//!
//! Contains basic site information like title, tagline, author, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Learning Rust"
/// tagline = "Companion articles and projects for the book."
/// author = "Alice"
/// url = "https://learning-rust.example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in browser tab and headers.
    pub title: String,

    /// Short tagline shown in the home page hero section.
    #[serde(default)]
    pub tagline: String,

    /// Site description for SEO meta tags.
    #[serde(default)]
    pub description: String,

    /// Author name for the bio section and meta tags.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Short author bio shown on the home page.
    #[serde(default)]
    pub bio: String,

    /// Base URL for absolute links.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
