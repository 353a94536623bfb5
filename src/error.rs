//! Error type for loading slide drafts and preview configuration.
//!
//! Rendering itself never fails: malformed box data degrades to defaults.
//! Only the edges that read external input return these errors.

use std::path::PathBuf;

/// Error returned while loading a draft or configuration.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The draft payload is not valid JSON for a slide.
    #[error("invalid slide JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The draft file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An environment variable held an unusable value.
    #[error("config error: {0}")]
    ConfigParse(String),
}
