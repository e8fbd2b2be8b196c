//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn articles() -> PathBuf {
        "content/articles".into()
    }

    pub fn projects() -> PathBuf {
        "content/projects".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }
}

// ============================================================================
// [repo] Section Defaults
// ============================================================================

pub mod repo {
    pub fn branch() -> String {
        "main".into()
    }

    pub fn clone_dir() -> String {
        "book-projects".into()
    }

    pub fn install_command() -> String {
        String::new()
    }
}
