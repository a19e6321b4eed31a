//! Data types for TheTVDB records
//!
//! The legacy XML API returns loosely-typed payloads: flat elements
//! whose names vary between endpoints and whose values are all text.
//! Every record in this library is therefore backed by an [`Attributes`]
//! map, with typed accessors that parse well-known fields on demand.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mirrors::MirrorList;

/// Ordered map of XML leaf element name to text content
///
/// Empty values are suppressed at insertion time, so `get` never
/// returns an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, dropping empty or whitespace-only values.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.0.insert(name.into(), value);
        }
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Look up an attribute and parse it into `T`.
    ///
    /// Returns `None` if the attribute is absent or fails to parse.
    pub fn get_parsed<T: FromStr>(&self, name: &str) -> Option<T> {
        self.get(name)?.trim().parse().ok()
    }

    /// Split a pipe-separated attribute (`|Drama|Comedy|`) into a list.
    ///
    /// Missing attributes yield an empty list.
    pub fn pipe_list(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|value| {
                value
                    .split('|')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Merge `other` into `self`; values from `other` win on conflict.
    pub fn merge(&mut self, other: Attributes) {
        self.0.extend(other.0);
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over name/value pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Build an asset URL under the banner mirror's `/banners/` prefix.
fn asset_url(mirrors: &MirrorList, path: &str) -> Option<String> {
    let mirror = mirrors.banner_mirror()?;
    Some(format!("{}/banners/{}", mirror, path.trim_start_matches('/')))
}

/// A single episode of a series
///
/// Populated from one `<Episode>` element of a series detail fetch;
/// has no lifecycle of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    attributes: Attributes,
}

impl Episode {
    /// Create an episode from a parsed attribute map.
    pub fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Raw attribute access.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// All attributes of this episode.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Episode id.
    pub fn id(&self) -> Option<u32> {
        self.attributes.get_parsed("id")
    }

    /// Episode name.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("EpisodeName")
    }

    /// Season number this episode belongs to.
    pub fn season_number(&self) -> Option<u32> {
        self.attributes.get_parsed("SeasonNumber")
    }

    /// Episode number within its season.
    pub fn episode_number(&self) -> Option<u32> {
        self.attributes.get_parsed("EpisodeNumber")
    }

    /// First-aired date as the service reports it (YYYY-MM-DD).
    pub fn first_aired(&self) -> Option<&str> {
        self.attributes.get("FirstAired")
    }

    /// Episode overview text.
    pub fn overview(&self) -> Option<&str> {
        self.attributes.get("Overview")
    }

    /// Guest stars, split from the pipe-separated `GuestStars` field.
    pub fn guest_stars(&self) -> Vec<String> {
        self.attributes.pipe_list("GuestStars")
    }

    /// URL of the episode still image, under the banner mirror.
    pub fn filename_url(&self, mirrors: &MirrorList) -> Option<String> {
        asset_url(mirrors, self.attributes.get("filename")?)
    }
}

/// An actor appearing in a series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    attributes: Attributes,
}

impl Actor {
    /// Create an actor from a parsed attribute map.
    pub fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Raw attribute access.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// All attributes of this actor.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Actor id.
    pub fn id(&self) -> Option<u32> {
        self.attributes.get_parsed("id")
    }

    /// Actor name.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("Name")
    }

    /// Role the actor plays in the series.
    pub fn role(&self) -> Option<&str> {
        self.attributes.get("Role")
    }

    /// Sort order within the cast list.
    pub fn sort_order(&self) -> Option<u32> {
        self.attributes.get_parsed("SortOrder")
    }

    /// URL of the actor's headshot, under the banner mirror.
    pub fn image_url(&self, mirrors: &MirrorList) -> Option<String> {
        asset_url(mirrors, self.attributes.get("Image")?)
    }
}

/// A banner (artwork) attached to a series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    attributes: Attributes,
}

impl Banner {
    /// Create a banner from a parsed attribute map.
    pub fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Raw attribute access.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// All attributes of this banner.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Banner id.
    pub fn id(&self) -> Option<u32> {
        self.attributes.get_parsed("id")
    }

    /// Banner category (`poster`, `fanart`, `season`, `series`).
    pub fn banner_type(&self) -> Option<&str> {
        self.attributes.get("BannerType")
    }

    /// Sub-category, usually the banner's dimensions.
    pub fn banner_type2(&self) -> Option<&str> {
        self.attributes.get("BannerType2")
    }

    /// Language abbreviation of text on the banner.
    pub fn language(&self) -> Option<&str> {
        self.attributes.get("Language")
    }

    /// Community rating of the banner.
    pub fn rating(&self) -> Option<f32> {
        self.attributes.get_parsed("Rating")
    }

    /// Number of votes behind the rating.
    pub fn rating_count(&self) -> Option<u32> {
        self.attributes.get_parsed("RatingCount")
    }

    /// Full-size banner URL, under the banner mirror.
    pub fn banner_url(&self, mirrors: &MirrorList) -> Option<String> {
        asset_url(mirrors, self.attributes.get("BannerPath")?)
    }

    /// Thumbnail URL, under the banner mirror.
    pub fn thumbnail_url(&self, mirrors: &MirrorList) -> Option<String> {
        asset_url(mirrors, self.attributes.get("ThumbnailPath")?)
    }
}
