//! Error types for Recreio Core
//!
//! Submission failures never surface here: the pipeline turns them into
//! page feedback. These cover the surfaces around it:
//! - Loading site configuration
//! - Building header components

use std::path::PathBuf;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for [`crate::SiteConfig`]
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Whether the file itself is missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Header component construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// `home` route was empty
    #[error("Header component 'data-home' attribute is mandatory.")]
    MissingHome,
}
