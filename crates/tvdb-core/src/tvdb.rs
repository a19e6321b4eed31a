//! Main TheTVDB client facade
//!
//! This module provides the high-level API of the library. It combines
//! the retrying HTTP client with the payload parsers: searching returns
//! shallow [`Series`] records wired up for their own later detail
//! fetches.

use std::sync::Arc;

use crate::client::TvdbClient;
use crate::config::TvdbBuilder;
use crate::error::{Result, TvdbError};
use crate::languages::Language;
use crate::mirrors::MirrorList;
use crate::parser;
use crate::series::{Series, SeriesContext};

/// Client for TheTVDB's legacy XML API
///
/// Holds the resolved configuration plus two lazily-populated caches:
/// the mirror directory (fetched at most once per client) and the last
/// search results.
///
/// # Example
/// ```no_run
/// use tvdb_core::Tvdb;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut tvdb = Tvdb::builder().api_key("0629B785CE550C8D").build()?;
///
///     let results = tvdb.search("Scrubs").await?;
///     println!("Found {} series", results.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Tvdb {
    api_key: String,
    language: &'static Language,
    client: Arc<TvdbClient>,
    mirrors: Option<MirrorList>,
    last_search: Vec<Series>,
}

impl Tvdb {
    /// Start building a client.
    pub fn builder() -> TvdbBuilder {
        TvdbBuilder::new()
    }

    /// Assemble a client from already-resolved parts.
    ///
    /// Called by [`TvdbBuilder::build`]; not part of the public surface.
    pub(crate) fn from_parts(
        api_key: String,
        language: &'static Language,
        client: Arc<TvdbClient>,
    ) -> Self {
        Self {
            api_key,
            language,
            client,
            mirrors: None,
            last_search: Vec::new(),
        }
    }

    /// API key this client requests with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Resolved language of this client.
    pub fn language(&self) -> &'static Language {
        self.language
    }

    /// Base URL this client requests against.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Retry budget of this client.
    pub fn max_retries(&self) -> u32 {
        self.client.max_retries()
    }

    /// Mirror directory, if it has been fetched already.
    pub fn mirrors(&self) -> Option<&MirrorList> {
        self.mirrors.as_ref()
    }

    /// Results of the most recent successful search.
    pub fn last_search_results(&self) -> &[Series] {
        &self.last_search
    }

    /// Search for series by name.
    ///
    /// Ensures the mirror directory is loaded, then fetches
    /// `GetSeries.php` with the client's retry policy and parses the
    /// response into one shallow [`Series`] per match. Each record
    /// carries the client's API key, language and mirror list for its
    /// own later [`Series::fetch`]. The list is also cached as the
    /// last search results.
    ///
    /// # Arguments
    /// * `term` - Series name to search for
    ///
    /// # Errors
    /// - `TvdbError::EmptySearchTerm` - `term` is empty or
    ///   whitespace-only; no HTTP request is made
    /// - `TvdbError::Http` / `TvdbError::MissingElement` - the one-shot
    ///   mirror directory fetch failed
    /// - `TvdbError::RetriesExhausted` - the search request kept failing
    /// - `TvdbError::Xml` - the response is not well-formed XML
    pub async fn search(&mut self, term: &str) -> Result<Vec<Series>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(TvdbError::EmptySearchTerm);
        }

        let mirrors = self.ensure_mirrors().await?;

        let url = format!(
            "{}/api/GetSeries.php?seriesname={}&language={}",
            self.client.base_url(),
            urlencoding::encode(term),
            self.language.abbreviation
        );
        let body = self.client.get(&url).await?;
        let matches = parser::parse_search(&body)?;

        let context = Arc::new(SeriesContext {
            api_key: self.api_key.clone(),
            language: self.language,
            mirrors,
            client: Arc::clone(&self.client),
        });
        let results: Vec<Series> = matches
            .into_iter()
            .map(|attributes| Series::new(attributes, Arc::clone(&context)))
            .collect();

        self.last_search = results.clone();
        Ok(results)
    }

    /// Load the mirror directory if this client has not done so yet.
    ///
    /// The request is a single attempt, deliberately without retries.
    async fn ensure_mirrors(&mut self) -> Result<MirrorList> {
        if let Some(mirrors) = &self.mirrors {
            return Ok(mirrors.clone());
        }

        let url = format!(
            "{}/api/{}/mirrors.xml",
            self.client.base_url(),
            self.api_key
        );
        let body = self.client.get_once(&url).await?;
        let mirrors = parser::parse_mirror_list(&body)?;

        self.mirrors = Some(mirrors.clone());
        Ok(mirrors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Tvdb {
        Tvdb::builder().api_key("KEY").build().unwrap()
    }

    #[tokio::test]
    async fn test_search_empty_term() {
        let mut tvdb = test_client();
        let result = tvdb.search("").await;
        assert!(matches!(result, Err(TvdbError::EmptySearchTerm)));
    }

    #[tokio::test]
    async fn test_search_whitespace_term() {
        let mut tvdb = test_client();
        let result = tvdb.search("   \t").await;
        assert!(matches!(result, Err(TvdbError::EmptySearchTerm)));
    }

    #[test]
    fn test_new_client_has_no_mirrors_or_results() {
        let tvdb = test_client();
        assert!(tvdb.mirrors().is_none());
        assert!(tvdb.last_search_results().is_empty());
    }

    #[test]
    fn test_client_exposes_resolved_config() {
        let tvdb = Tvdb::builder()
            .api_key("KEY")
            .language("French")
            .max_retries(3)
            .build()
            .unwrap();
        assert_eq!(tvdb.api_key(), "KEY");
        assert_eq!(tvdb.language().abbreviation, "fr");
        assert_eq!(tvdb.max_retries(), 3);
        assert_eq!(tvdb.base_url(), "http://thetvdb.com");
    }
}
