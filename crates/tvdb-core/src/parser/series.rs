//! Parser for `series/<id>/all/<lang>.xml` detail responses
//!
//! The detail payload carries one `<Series>` element with the full
//! field set, followed by the `<Episode>` list.

use crate::error::{Result, TvdbError};
use crate::parser::xml::parse_document;
use crate::types::{Attributes, Episode};

/// Parsed series detail payload
#[derive(Debug, Clone)]
pub struct SeriesPayload {
    /// Full attribute set of the series
    pub attributes: Attributes,
    /// All episodes, in document order
    pub episodes: Vec<Episode>,
}

/// Parse a series detail response.
///
/// # Arguments
/// * `body` - Raw XML response text
///
/// # Errors
/// - `TvdbError::Xml` - malformed XML
/// - `TvdbError::MissingElement` - no `<Data>` root or no `<Series>` element
pub fn parse_series_detail(body: &str) -> Result<SeriesPayload> {
    let root = parse_document(body)?;
    if root.name != "Data" {
        return Err(TvdbError::MissingElement("Data".to_string()));
    }

    let series = root
        .child("Series")
        .ok_or_else(|| TvdbError::MissingElement("Series".to_string()))?;

    let episodes = root
        .children_named("Episode")
        .map(|episode| Episode::new(episode.attributes()))
        .collect();

    Ok(SeriesPayload {
        attributes: series.attributes(),
        episodes,
    })
}
