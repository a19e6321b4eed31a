//! Parser for `series/<id>/actors.xml` responses

use crate::error::{Result, TvdbError};
use crate::parser::xml::parse_document;
use crate::types::Actor;

/// Parse an actor list response.
///
/// # Errors
/// - `TvdbError::Xml` - malformed XML
/// - `TvdbError::MissingElement` - the root element is not `<Actors>`
pub fn parse_actors(body: &str) -> Result<Vec<Actor>> {
    let root = parse_document(body)?;
    if root.name != "Actors" {
        return Err(TvdbError::MissingElement("Actors".to_string()));
    }

    Ok(root
        .children_named("Actor")
        .map(|actor| Actor::new(actor.attributes()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTORS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<Actors>
  <Actor>
    <id>43640</id>
    <Image>actors/43640.jpg</Image>
    <Name>Zach Braff</Name>
    <Role>John Dorian</Role>
    <SortOrder>0</SortOrder>
  </Actor>
  <Actor>
    <id>43641</id>
    <Image></Image>
    <Name>Donald Faison</Name>
    <Role>Chris Turk</Role>
    <SortOrder>1</SortOrder>
  </Actor>
</Actors>"#;

    #[test]
    fn test_parse_actors() {
        let actors = parse_actors(ACTORS).unwrap();
        assert_eq!(actors.len(), 2);
        assert_eq!(actors[0].name(), Some("Zach Braff"));
        assert_eq!(actors[0].role(), Some("John Dorian"));
        assert_eq!(actors[0].sort_order(), Some(0));
        // Empty <Image> is suppressed
        assert_eq!(actors[1].attribute("Image"), None);
    }

    #[test]
    fn test_parse_actors_empty_list() {
        let actors = parse_actors("<Actors></Actors>").unwrap();
        assert!(actors.is_empty());
    }

    #[test]
    fn test_parse_actors_wrong_root() {
        assert!(matches!(
            parse_actors("<Data></Data>"),
            Err(TvdbError::MissingElement(_))
        ));
    }
}
