//! Language table for the legacy TheTVDB service
//!
//! The legacy XML API identifies languages by a two-letter abbreviation
//! and a numeric id. Callers configure the client with a human-readable
//! name ("English", "German", ...), which is resolved against this
//! static table. The table is immutable and shared by all clients.

use serde::Serialize;

/// A language supported by the legacy service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Human-readable name used for client configuration
    pub name: &'static str,
    /// Two-letter abbreviation used in request URLs
    pub abbreviation: &'static str,
    /// Numeric language id used by the service
    pub id: u32,
}

/// The 23 languages the legacy service supports
pub const LANGUAGES: &[Language] = &[
    Language { name: "Chinese", abbreviation: "zh", id: 27 },
    Language { name: "Croatian", abbreviation: "hr", id: 31 },
    Language { name: "Czech", abbreviation: "cs", id: 28 },
    Language { name: "Danish", abbreviation: "da", id: 10 },
    Language { name: "Dutch", abbreviation: "nl", id: 13 },
    Language { name: "English", abbreviation: "en", id: 7 },
    Language { name: "Finnish", abbreviation: "fi", id: 11 },
    Language { name: "French", abbreviation: "fr", id: 17 },
    Language { name: "German", abbreviation: "de", id: 14 },
    Language { name: "Greek", abbreviation: "el", id: 20 },
    Language { name: "Hebrew", abbreviation: "he", id: 24 },
    Language { name: "Hungarian", abbreviation: "hu", id: 19 },
    Language { name: "Italian", abbreviation: "it", id: 15 },
    Language { name: "Japanese", abbreviation: "ja", id: 25 },
    Language { name: "Korean", abbreviation: "ko", id: 32 },
    Language { name: "Norwegian", abbreviation: "no", id: 9 },
    Language { name: "Polish", abbreviation: "pl", id: 18 },
    Language { name: "Portuguese", abbreviation: "pt", id: 26 },
    Language { name: "Russian", abbreviation: "ru", id: 22 },
    Language { name: "Slovenian", abbreviation: "sl", id: 30 },
    Language { name: "Spanish", abbreviation: "es", id: 16 },
    Language { name: "Swedish", abbreviation: "sv", id: 8 },
    Language { name: "Turkish", abbreviation: "tr", id: 21 },
];

/// Default language name when none is configured
pub const DEFAULT_LANGUAGE: &str = "English";

/// Look up a language by its human-readable name, case-insensitively.
///
/// # Arguments
/// * `name` - Language name, e.g. "English" or "german"
///
/// # Returns
/// * `Some(&Language)` if the name is known
/// * `None` for names the service does not support
///
/// # Example
/// ```
/// use tvdb_core::languages;
///
/// let lang = languages::lookup("English").unwrap();
/// assert_eq!(lang.abbreviation, "en");
/// assert!(languages::lookup("Klingon").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|language| language.name.eq_ignore_ascii_case(name))
}
