//! Site configuration
//!
//! Loaded from TOML, then layered: file, then `RECREIO_BASE_URL`, then
//! whatever the caller sets with the `with_*` methods (the CLI flags).

use crate::error::ConfigError;
use recreio_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides [`ClientConfig::base_url`]
pub const BASE_URL_ENV: &str = "RECREIO_BASE_URL";

/// User-facing texts that are not tied to a single form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Alerted for network, parse and unexpected-status failures
    pub generic_failure: String,
    /// Prefix of the alert for errors on a field the form does not have
    pub field_errors_header: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            generic_failure: "Ocorreu um erro inesperado. Por favor, tente novamente mais tarde."
                .to_string(),
            field_errors_header: "Erros no campo".to_string(),
        }
    }
}

/// Recreio site configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// HTTP client settings
    pub client: ClientConfig,
    /// Shared feedback texts
    pub messages: Messages,
}

impl SiteConfig {
    /// Create configuration with defaults
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Parse` if it is not valid configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), base_url = %config.client.base_url, "Loaded config");
        Ok(config)
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` if it is not valid configuration
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`
    #[must_use]
    pub fn with_overrides_from(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_ENV).filter(|url| !url.is_empty()) {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    /// With API base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client.base_url = base_url.into();
        self
    }

    /// With session cookie header
    #[inline]
    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.client.cookie = Some(cookie.into());
        self
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.client.timeout_secs = Some(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = SiteConfig::new();
        assert_eq!(config.client.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.client.timeout_secs, None);
        assert_eq!(config.messages.field_errors_header, "Erros no campo");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [client]
            base_url = "https://recreio.example"
            timeout_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.client.base_url, "https://recreio.example");
        assert_eq!(config.client.timeout_secs, Some(10));
        assert_eq!(config.messages, Messages::default());
    }

    #[test]
    fn env_overrides_file() {
        let config = SiteConfig::new()
            .with_base_url("http://from-file")
            .with_overrides_from(|key| (key == BASE_URL_ENV).then(|| "http://from-env".to_string()));
        assert_eq!(config.client.base_url, "http://from-env");

        let untouched = SiteConfig::new()
            .with_base_url("http://from-file")
            .with_overrides_from(|_| Some(String::new()));
        assert_eq!(untouched.client.base_url, "http://from-file");
    }

    #[test]
    fn unknown_types_are_rejected() {
        let err = SiteConfig::from_toml_str("[client]\ntimeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
