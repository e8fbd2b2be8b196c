//! Link records consumed by the presentation layer.
//!
//! `[[nav]]`, `[[social]]`, `[[starters]]` and the `[book]` section are
//! plain data: the renderers map them straight to markup.

use educe::Educe;
use serde::{Deserialize, Serialize};

/// A labelled link (`[[nav]]` and `[[social]]` entries).
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LinkItem {
    /// Visible link text.
    pub label: String,

    /// Link target (absolute URL or site-relative path).
    pub url: String,
}

/// A starter template link (`[[starters]]` entry).
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct StarterLink {
    /// Visible link text.
    pub label: String,

    /// Link target.
    pub url: String,

    /// One-line description shown under the link.
    #[serde(default)]
    pub description: String,
}

/// `[book]` section in folio.toml - "get the book" links.
///
/// # Example
/// ```toml
/// [book]
/// url = "https://example.com/book"
///
/// [[book.links]]
/// label = "Print"
/// url = "https://example.com/print"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BookConfig {
    /// Primary "get the book" URL.
    #[serde(default)]
    pub url: String,

    /// Purchase links (print, ebook, online reader, ...).
    #[serde(default)]
    pub links: Vec<LinkItem>,
}
