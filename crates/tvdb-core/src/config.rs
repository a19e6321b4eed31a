//! Client configuration and construction
//!
//! [`TvdbBuilder`] resolves the three knobs every client needs: the API
//! key (explicit value or a `~/.tvdb` dotfile), the language name
//! (default "English", resolved against the static table) and the retry
//! budget (default 10). The base URL, retry delay and timeout can be
//! overridden so tests can point the client at a local server without
//! real sleeping.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::client::{ClientConfig, TvdbClient, DEFAULT_MAX_RETRIES};
use crate::error::{Result, TvdbError};
use crate::languages::{self, DEFAULT_LANGUAGE};
use crate::tvdb::Tvdb;

/// Name of the fallback API-key dotfile in the user's home directory
const KEY_FILE_NAME: &str = ".tvdb";

/// Builder for [`Tvdb`] clients
///
/// # Example
/// ```no_run
/// use tvdb_core::Tvdb;
///
/// # fn example() -> tvdb_core::Result<()> {
/// let tvdb = Tvdb::builder()
///     .api_key("0629B785CE550C8D")
///     .language("German")
///     .max_retries(3)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TvdbBuilder {
    api_key: Option<String>,
    language: Option<String>,
    max_retries: Option<u32>,
    api_key_file: Option<PathBuf>,
    base_url: Option<String>,
    retry_delay: Option<Duration>,
    timeout_secs: Option<u64>,
}

impl TvdbBuilder {
    /// Create a builder with nothing resolved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key explicitly, bypassing the dotfile.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the language by its human-readable name (default "English").
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the retry budget (default 10).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Read the API key from this file instead of `~/.tvdb`.
    pub fn api_key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.api_key_file = Some(path.into());
        self
    }

    /// Override the service base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = Some(base_url);
        self
    }

    /// Override the delay between retry attempts (default 1 second).
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Override the per-request timeout in seconds (default 30).
    pub fn timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Resolve the configuration and construct the client.
    ///
    /// # Errors
    /// - `TvdbError::Configuration` - no API key given and the dotfile
    ///   is absent, unreadable or empty; or the language name is not in
    ///   the static table
    /// - `TvdbError::Http` - the HTTP client could not be created
    pub fn build(self) -> Result<Tvdb> {
        let api_key = match self.api_key {
            Some(key) => key,
            None => read_key_file(self.api_key_file)?,
        };

        let language_name = self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
        let language = languages::lookup(language_name).ok_or_else(|| {
            TvdbError::Configuration(format!("unknown language: {}", language_name))
        })?;

        let defaults = ClientConfig::default();
        let config = ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_delay: self.retry_delay.unwrap_or(defaults.retry_delay),
        };
        let client = Arc::new(TvdbClient::with_config(config)?);

        Ok(Tvdb::from_parts(api_key, language, client))
    }
}

/// Read the API key from the dotfile: first line, trimmed.
fn read_key_file(path: Option<PathBuf>) -> Result<String> {
    let path = match path {
        Some(path) => path,
        None => default_key_file()?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|err| {
        TvdbError::Configuration(format!(
            "cannot read API key file {}: {}",
            path.display(),
            err
        ))
    })?;

    let key = contents.lines().next().unwrap_or("").trim();
    if key.is_empty() {
        return Err(TvdbError::Configuration(format!(
            "API key file {} is empty",
            path.display()
        )));
    }

    Ok(key.to_string())
}

/// Default key file location: `~/.tvdb`.
fn default_key_file() -> Result<PathBuf> {
    let base_dirs = directories::BaseDirs::new()
        .ok_or_else(|| TvdbError::Configuration("cannot determine home directory".to_string()))?;
    Ok(base_dirs.home_dir().join(KEY_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_key_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tvdb-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_build_with_explicit_key() {
        let tvdb = TvdbBuilder::new().api_key("KEY").build().unwrap();
        assert_eq!(tvdb.api_key(), "KEY");
        assert_eq!(tvdb.language().name, "English");
        assert_eq!(tvdb.max_retries(), 10);
    }

    #[test]
    fn test_build_reads_key_file_first_line() {
        let path = temp_key_file("first-line", "FILEKEY\nsecond line\n");
        let tvdb = TvdbBuilder::new().api_key_file(&path).build().unwrap();
        assert_eq!(tvdb.api_key(), "FILEKEY");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_build_missing_key_file_is_configuration_error() {
        let path = std::env::temp_dir().join("tvdb-no-such-file");
        let result = TvdbBuilder::new().api_key_file(path).build();
        assert!(matches!(result, Err(TvdbError::Configuration(_))));
    }

    #[test]
    fn test_build_empty_key_file_is_configuration_error() {
        let path = temp_key_file("empty", "\n\n");
        let result = TvdbBuilder::new().api_key_file(&path).build();
        assert!(matches!(result, Err(TvdbError::Configuration(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_build_unknown_language_is_configuration_error() {
        let result = TvdbBuilder::new().api_key("KEY").language("Klingon").build();
        match result {
            Err(TvdbError::Configuration(msg)) => assert!(msg.contains("Klingon")),
            other => panic!("Expected Configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_build_language_case_insensitive() {
        let tvdb = TvdbBuilder::new()
            .api_key("KEY")
            .language("german")
            .build()
            .unwrap();
        assert_eq!(tvdb.language().abbreviation, "de");
    }

    #[test]
    fn test_build_base_url_trailing_slash_normalized() {
        let tvdb = TvdbBuilder::new()
            .api_key("KEY")
            .base_url("http://localhost:9000/")
            .build()
            .unwrap();
        assert_eq!(tvdb.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_build_custom_retries() {
        let tvdb = TvdbBuilder::new()
            .api_key("KEY")
            .max_retries(0)
            .build()
            .unwrap();
        assert_eq!(tvdb.max_retries(), 0);
    }
}
