//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[base]`      | Site metadata (title, tagline, author, url)    |
//! | `[content]`   | Content directories and output path            |
//! | `[repo]`      | External projects repository (for injection)   |
//! | `[book]`      | "Get the book" links                           |
//! | `[[nav]]`     | Navigation links                               |
//! | `[[social]]`  | Social links for the footer                    |
//! | `[[starters]]`| Starter template links                         |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Learning Rust"
//! tagline = "Companion articles and projects for the book."
//! url = "https://example.com"
//!
//! [content]
//! articles = "content/articles"
//! projects = "content/projects"
//! output = "public"
//!
//! [repo]
//! url = "https://github.com/example/projects"
//!
//! [[nav]]
//! label = "Articles"
//! url = "/articles"
//! ```

mod base;
mod content;
pub mod defaults;
mod error;
mod links;
mod repo;

// Re-export public types used by other modules
pub use base::BaseConfig;
pub use content::ContentConfig;
pub use links::{BookConfig, LinkItem, StarterLink};
pub use repo::RepoConfig;

use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content directories and output path
    #[serde(default)]
    pub content: ContentConfig,

    /// External projects repository settings
    #[serde(default)]
    pub repo: RepoConfig,

    /// "Get the book" links
    #[serde(default)]
    pub book: BookConfig,

    /// Navigation links
    #[serde(default)]
    pub nav: Vec<LinkItem>,

    /// Social links for the footer
    #[serde(default)]
    pub social: Vec<LinkItem>,

    /// Starter template links
    #[serde(default)]
    pub starters: Vec<StarterLink>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        if self.root.as_os_str().is_empty() {
            Path::new("./")
        } else {
            &self.root
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        if let Some(output) = cli.output.as_ref() {
            self.content.output = output.clone();
        }

        self.update_path_with_root(&root);
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);

        if let Some(cli) = self.cli {
            self.config_path = Self::normalize_path(&root.join(&cli.config));
        }

        self.content.articles = Self::normalize_path(&root.join(&self.content.articles));
        self.content.projects = Self::normalize_path(&root.join(&self.content.projects));
        self.content.output = Self::normalize_path(&root.join(&self.content.output));
        self.root = root;
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.content.articles.exists() {
            bail!(ConfigError::Validation(format!(
                "[content.articles] directory not found: {}",
                self.content.articles.display()
            )));
        }

        if !self.content.projects.exists() {
            bail!(ConfigError::Validation(format!(
                "[content.projects] directory not found: {}",
                self.content.projects.display()
            )));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.repo.url.is_empty() {
            bail!(ConfigError::Validation(
                "[repo.url] is required for project pages".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "Learning Rust"
            tagline = "Companion site for the book"
            author = "Alice"
        "#;
        let result = SiteConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base.title, "Learning Rust");
        assert_eq!(config.base.author, "Alice");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "Learning Rust"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"

            [unknown_section]
            field = "value"
        "#;
        let result = SiteConfig::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [base]
            title = "Learning Rust"
            tagline = "Companion articles and projects"
            description = "Articles on Rust features"
            author = "Alice"
            url = "https://learning-rust.example.com"

            [content]
            articles = "content/articles"
            projects = "content/projects"
            output = "dist"

            [repo]
            url = "https://github.com/example/projects"
            branch = "main"
            clone_dir = "learning-rust-projects"
            install_command = "cargo fetch"

            [book]
            url = "https://example.com/book"

            [[book.links]]
            label = "Print"
            url = "https://example.com/print"

            [[nav]]
            label = "Articles"
            url = "/articles"

            [[social]]
            label = "GitHub"
            url = "https://github.com/example"

            [[starters]]
            label = "Minimal"
            url = "https://github.com/example/starter-minimal"
            description = "The smallest possible setup"
        "#;
        let config: SiteConfig = SiteConfig::from_str(config).unwrap();

        assert_eq!(config.base.title, "Learning Rust");
        assert_eq!(config.content.output, PathBuf::from("dist"));
        assert_eq!(config.repo.branch, "main");
        assert_eq!(config.book.links.len(), 1);
        assert_eq!(config.nav[0].label, "Articles");
        assert_eq!(config.social[0].url, "https://github.com/example");
        assert_eq!(config.starters[0].label, "Minimal");
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut config = SiteConfig::from_str(
            r#"
            [base]
            title = "Test"
            url = "ftp://example.com"
        "#,
        )
        .unwrap();
        // Point content dirs at an existing directory so URL validation is reached
        config.content.articles = std::env::temp_dir();
        config.content.projects = std::env::temp_dir();
        config.repo.url = "https://github.com/example/projects".into();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[base.url]"));
    }

    #[test]
    fn test_validate_requires_repo_url() {
        let mut config = SiteConfig::default();
        config.content.articles = std::env::temp_dir();
        config.content.projects = std::env::temp_dir();
        config.repo.url = String::new();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[repo.url]"));
    }
}
