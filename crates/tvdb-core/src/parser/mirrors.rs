//! Parser for `mirrors.xml` responses

use crate::error::{Result, TvdbError};
use crate::mirrors::{Mirror, MirrorList};
use crate::parser::xml::parse_document;

/// Parse a mirror directory response.
///
/// Entries without a `<mirrorpath>` are skipped; a missing or
/// unparsable `<typemask>` is treated as 0 (the mirror only matches
/// as a last-resort fallback).
///
/// # Errors
/// - `TvdbError::Xml` - malformed XML
/// - `TvdbError::MissingElement` - no `<Mirrors>` root, or no usable
///   `<Mirror>` entry
pub fn parse_mirror_list(body: &str) -> Result<MirrorList> {
    let root = parse_document(body)?;
    if root.name != "Mirrors" {
        return Err(TvdbError::MissingElement("Mirrors".to_string()));
    }

    let mirrors: Vec<Mirror> = root
        .children_named("Mirror")
        .filter_map(|mirror| {
            let attributes = mirror.attributes();
            let mirrorpath = attributes.get("mirrorpath")?;
            let typemask = attributes.get_parsed("typemask").unwrap_or(0);
            Some(Mirror::new(mirrorpath, typemask))
        })
        .collect();

    if mirrors.is_empty() {
        return Err(TvdbError::MissingElement("Mirror".to_string()));
    }

    Ok(MirrorList::new(mirrors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirrors::{TYPE_BANNER, TYPE_XML, TYPE_ZIP};

    const MIRRORS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<Mirrors>
  <Mirror>
    <id>1</id>
    <mirrorpath>http://thetvdb.com</mirrorpath>
    <typemask>7</typemask>
  </Mirror>
</Mirrors>"#;

    #[test]
    fn test_parse_mirror_list() {
        let list = parse_mirror_list(MIRRORS).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.xml_mirror(), Some("http://thetvdb.com"));

        let mirror = list.mirror_for(TYPE_XML).unwrap();
        assert!(mirror.hosts(TYPE_BANNER));
        assert!(mirror.hosts(TYPE_ZIP));
    }

    #[test]
    fn test_parse_mirror_list_missing_typemask() {
        let body = "<Mirrors><Mirror><mirrorpath>http://a.example.com</mirrorpath></Mirror></Mirrors>";
        let list = parse_mirror_list(body).unwrap();
        assert_eq!(list.len(), 1);
        assert!(!list.mirror_for(TYPE_XML).unwrap().hosts(TYPE_XML));
    }

    #[test]
    fn test_parse_mirror_list_no_entries() {
        match parse_mirror_list("<Mirrors></Mirrors>") {
            Err(TvdbError::MissingElement(name)) => assert_eq!(name, "Mirror"),
            other => panic!("Expected MissingElement, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_mirror_list_entry_without_path_skipped() {
        let body = r#"<Mirrors>
  <Mirror><typemask>1</typemask></Mirror>
  <Mirror><mirrorpath>http://b.example.com/</mirrorpath><typemask>1</typemask></Mirror>
</Mirrors>"#;
        let list = parse_mirror_list(body).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.xml_mirror(), Some("http://b.example.com"));
    }
}
