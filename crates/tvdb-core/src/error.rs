//! Error types for the TheTVDB client
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for TheTVDB client operations
#[derive(Error, Debug)]
pub enum TvdbError {
    /// Client could not be configured (missing API key, unknown language)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Search was called with an empty or whitespace-only term
    #[error("Search term cannot be empty")]
    EmptySearchTerm,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a success status but an empty body
    #[error("Empty response body from {0}")]
    EmptyResponse(String),

    /// All retry attempts for a URL were used up
    #[error("Request to {url} failed after {retries} retries")]
    RetriesExhausted {
        /// The URL that kept failing
        url: String,
        /// The retry budget that was exhausted
        retries: u32,
    },

    /// Response body was not well-formed XML
    #[error("Failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structurally valid XML was missing a required element
    #[error("Element not found: {0}")]
    MissingElement(String),
}

/// Result type alias for TheTVDB client operations
pub type Result<T> = std::result::Result<T, TvdbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tvdb_error_display_configuration() {
        let error = TvdbError::Configuration("no API key".to_string());
        assert_eq!(error.to_string(), "Configuration error: no API key");
    }

    #[test]
    fn test_tvdb_error_display_empty_search_term() {
        let error = TvdbError::EmptySearchTerm;
        assert_eq!(error.to_string(), "Search term cannot be empty");
    }

    #[test]
    fn test_tvdb_error_display_empty_response() {
        let error = TvdbError::EmptyResponse("http://example.com/api".to_string());
        assert_eq!(
            error.to_string(),
            "Empty response body from http://example.com/api"
        );
    }

    #[test]
    fn test_tvdb_error_display_retries_exhausted() {
        let error = TvdbError::RetriesExhausted {
            url: "http://example.com/api/GetSeries.php".to_string(),
            retries: 10,
        };
        let display = error.to_string();
        assert!(display.contains("http://example.com/api/GetSeries.php"));
        assert!(display.contains("10"));
    }

    #[test]
    fn test_tvdb_error_display_missing_element() {
        let error = TvdbError::MissingElement("Data".to_string());
        assert_eq!(error.to_string(), "Element not found: Data");
    }
}
