//! Parser for `series/<id>/banners.xml` responses

use crate::error::{Result, TvdbError};
use crate::parser::xml::parse_document;
use crate::types::Banner;

/// Parse a banner list response.
///
/// # Errors
/// - `TvdbError::Xml` - malformed XML
/// - `TvdbError::MissingElement` - the root element is not `<Banners>`
pub fn parse_banners(body: &str) -> Result<Vec<Banner>> {
    let root = parse_document(body)?;
    if root.name != "Banners" {
        return Err(TvdbError::MissingElement("Banners".to_string()));
    }

    Ok(root
        .children_named("Banner")
        .map(|banner| Banner::new(banner.attributes()))
        .collect())
}
