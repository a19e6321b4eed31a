//! Parser for `GetSeries.php` search responses
//!
//! A search response is a `<Data>` root holding zero or more `<Series>`
//! elements, each a flat list of text fields.

use crate::error::{Result, TvdbError};
use crate::parser::xml::parse_document;
use crate::types::Attributes;

/// Parse a search response into one attribute map per `<Series>`.
///
/// Zero matches is a valid response: the service answers an empty
/// `<Data>` element, which parses into an empty list.
///
/// # Arguments
/// * `body` - Raw XML response text
///
/// # Errors
/// - `TvdbError::Xml` - malformed XML
/// - `TvdbError::MissingElement` - the root element is not `<Data>`
pub fn parse_search(body: &str) -> Result<Vec<Attributes>> {
    let root = parse_document(body)?;
    if root.name != "Data" {
        return Err(TvdbError::MissingElement("Data".to_string()));
    }

    Ok(root
        .children_named("Series")
        .map(|series| series.attributes())
        .collect())
}
