//! Content error types.
//!
//! Every content failure is fatal at build time and names the document
//! that caused it. Nothing is silently dropped.

use std::path::PathBuf;
use thiserror::Error;

/// Content-related errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{path}` has no front matter prologue")]
    MissingFrontMatter { path: PathBuf },

    #[error("`{path}` is missing required front matter field `{field}`")]
    MissingField { field: &'static str, path: PathBuf },

    #[error("`{path}` has invalid date `{value}` (expected YYYY-MM-DD)")]
    InvalidDate {
        value: String,
        path: PathBuf,
        #[source]
        source: chrono::ParseError,
    },

    #[error("`{path}` has no leading `#` heading")]
    MissingHeading { path: PathBuf },

    #[error("`{path}` names no difficulty tier (starter, standard or advanced)")]
    MissingTier { path: PathBuf },

    #[error("project `{project}` belongs to chapter `{chapter}`, which has no README")]
    UnknownChapter { chapter: String, project: PathBuf },
}
