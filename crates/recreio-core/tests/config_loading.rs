//! Configuration Loading Tests

use recreio_core::config::BASE_URL_ENV;
use recreio_core::{ConfigError, SiteConfig};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[client]
base_url = "https://recreio.example"
cookie = "session=abc"

[messages]
generic_failure = "Algo deu errado."
"#
    )
    .unwrap();

    let config = SiteConfig::load(file.path()).unwrap();

    assert_eq!(config.client.base_url, "https://recreio.example");
    assert_eq!(config.client.cookie.as_deref(), Some("session=abc"));
    assert_eq!(config.messages.generic_failure, "Algo deu errado.");
    assert_eq!(config.messages.field_errors_header, "Erros no campo");
}

#[test]
fn test_layering_file_env_then_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[client]\nbase_url = \"http://from-file\"").unwrap();

    let from_env = SiteConfig::load(file.path())
        .unwrap()
        .with_overrides_from(|key| (key == BASE_URL_ENV).then(|| "http://from-env".to_string()));
    assert_eq!(from_env.client.base_url, "http://from-env");

    let from_flag = from_env.with_base_url("http://from-flag");
    assert_eq!(from_flag.client.base_url, "http://from-flag");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteConfig::load(dir.path().join("recreio.toml")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[client\nbase_url = 1").unwrap();

    let err = SiteConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
