//! Mirror directory for TheTVDB
//!
//! The service publishes a list of mirror base URLs, each tagged with a
//! bitmask describing which content it hosts. The client fetches the
//! list once per lifetime and uses it to build detail and asset URLs.

use serde::{Deserialize, Serialize};

/// Mirror hosts XML payloads (search/detail endpoints)
pub const TYPE_XML: u32 = 1;

/// Mirror hosts banner and other image assets
pub const TYPE_BANNER: u32 = 2;

/// Mirror hosts zipped bundles
pub const TYPE_ZIP: u32 = 4;

/// A single service mirror
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mirror {
    /// Base URL of the mirror, without a trailing slash
    pub mirrorpath: String,
    /// Bitmask of content types this mirror hosts
    pub typemask: u32,
}

impl Mirror {
    /// Create a mirror, normalizing away a trailing slash on the path.
    pub fn new(mirrorpath: impl Into<String>, typemask: u32) -> Self {
        let mut mirrorpath = mirrorpath.into();
        while mirrorpath.ends_with('/') {
            mirrorpath.pop();
        }
        Self { mirrorpath, typemask }
    }

    /// Whether this mirror hosts the given content type.
    pub fn hosts(&self, mask: u32) -> bool {
        self.typemask & mask != 0
    }
}

/// Ordered list of service mirrors
///
/// Selection is deterministic: the first mirror carrying the wanted
/// typemask bit wins, falling back to the first mirror in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorList(Vec<Mirror>);

impl MirrorList {
    /// Create a mirror list from already-parsed entries.
    pub fn new(mirrors: Vec<Mirror>) -> Self {
        Self(mirrors)
    }

    /// Number of mirrors in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the mirrors in order.
    pub fn iter(&self) -> impl Iterator<Item = &Mirror> {
        self.0.iter()
    }

    /// First mirror hosting the given content type, falling back to the
    /// first mirror in the list.
    pub fn mirror_for(&self, mask: u32) -> Option<&Mirror> {
        self.0
            .iter()
            .find(|mirror| mirror.hosts(mask))
            .or_else(|| self.0.first())
    }

    /// Base URL for XML payloads (detail endpoints).
    pub fn xml_mirror(&self) -> Option<&str> {
        self.mirror_for(TYPE_XML).map(|m| m.mirrorpath.as_str())
    }

    /// Base URL for banner and image assets.
    pub fn banner_mirror(&self) -> Option<&str> {
        self.mirror_for(TYPE_BANNER).map(|m| m.mirrorpath.as_str())
    }

    /// Base URL for zipped bundles.
    pub fn zip_mirror(&self) -> Option<&str> {
        self.mirror_for(TYPE_ZIP).map(|m| m.mirrorpath.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_trailing_slash_normalized() {
        let mirror = Mirror::new("http://thetvdb.com/", TYPE_XML);
        assert_eq!(mirror.mirrorpath, "http://thetvdb.com");
    }

    #[test]
    fn test_mirror_hosts_bitmask() {
        let mirror = Mirror::new("http://thetvdb.com", TYPE_XML | TYPE_BANNER);
        assert!(mirror.hosts(TYPE_XML));
        assert!(mirror.hosts(TYPE_BANNER));
        assert!(!mirror.hosts(TYPE_ZIP));
    }

    #[test]
    fn test_mirror_selection_first_matching_bit() {
        let list = MirrorList::new(vec![
            Mirror::new("http://xml.example.com", TYPE_XML),
            Mirror::new("http://images.example.com", TYPE_BANNER),
            Mirror::new("http://images2.example.com", TYPE_BANNER),
        ]);

        assert_eq!(list.xml_mirror(), Some("http://xml.example.com"));
        assert_eq!(list.banner_mirror(), Some("http://images.example.com"));
    }

    #[test]
    fn test_mirror_selection_falls_back_to_first() {
        let list = MirrorList::new(vec![Mirror::new("http://only.example.com", TYPE_XML)]);
        // No banner-typed mirror, fall back to the first entry
        assert_eq!(list.banner_mirror(), Some("http://only.example.com"));
        assert_eq!(list.zip_mirror(), Some("http://only.example.com"));
    }

    #[test]
    fn test_empty_mirror_list() {
        let list = MirrorList::default();
        assert!(list.is_empty());
        assert_eq!(list.xml_mirror(), None);
    }
}
