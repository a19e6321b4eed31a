//! Series records
//!
//! A [`Series`] is the shallow record a search yields: the fields of
//! one `<Series>` search element plus the context needed to fetch more.
//! Calling [`Series::fetch`] performs the detail requests and produces
//! a new [`SeriesFull`] value carrying the merged attribute set and the
//! episode, actor and banner collections; the shallow record is left
//! untouched.

use std::sync::Arc;

use serde::Serialize;

use crate::client::TvdbClient;
use crate::error::{Result, TvdbError};
use crate::languages::Language;
use crate::mirrors::{MirrorList, TYPE_XML};
use crate::parser;
use crate::types::{Actor, Attributes, Banner, Episode};

/// Shared context a series record needs for its detail fetch
///
/// Injected by the [`Tvdb`](crate::Tvdb) facade when records are
/// constructed; records never look anything up globally.
#[derive(Debug)]
pub struct SeriesContext {
    /// API key of the owning client
    pub api_key: String,
    /// Resolved language of the owning client
    pub language: &'static Language,
    /// Mirror directory of the owning client
    pub mirrors: MirrorList,
    /// Retrying HTTP client
    pub client: Arc<TvdbClient>,
}

/// A series as returned by a search (shallow record)
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    attributes: Attributes,
    #[serde(skip)]
    context: Arc<SeriesContext>,
}

impl Series {
    /// Create a series record from parsed search attributes and the
    /// owning client's context.
    pub fn new(attributes: Attributes, context: Arc<SeriesContext>) -> Self {
        Self { attributes, context }
    }

    /// Raw attribute access.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// All attributes of this record.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Series id; search payloads use `seriesid`, detail payloads `id`.
    pub fn id(&self) -> Option<u32> {
        self.attributes
            .get_parsed("seriesid")
            .or_else(|| self.attributes.get_parsed("id"))
    }

    /// Series name.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("SeriesName")
    }

    /// Series overview text.
    pub fn overview(&self) -> Option<&str> {
        self.attributes.get("Overview")
    }

    /// First-aired date of the series.
    pub fn first_aired(&self) -> Option<&str> {
        self.attributes.get("FirstAired")
    }

    /// API key this record will fetch with.
    pub fn api_key(&self) -> &str {
        &self.context.api_key
    }

    /// Language this record will fetch in.
    pub fn language(&self) -> &'static Language {
        self.context.language
    }

    /// Mirror directory this record builds URLs from.
    pub fn mirrors(&self) -> &MirrorList {
        &self.context.mirrors
    }

    /// Fetch the full series detail.
    ///
    /// Performs three GETs against the XML mirror, each under the
    /// client's retry policy: the detail payload (series fields plus
    /// episodes), the actor list and the banner list. Detail values
    /// override shallow ones in the merged attribute set.
    ///
    /// # Returns
    /// A new [`SeriesFull`] value; `self` is not modified.
    ///
    /// # Errors
    /// - `TvdbError::MissingElement` - the record has no series id, or
    ///   a payload is missing a required element
    /// - `TvdbError::RetriesExhausted` - a detail request kept failing
    /// - `TvdbError::Xml` - a payload is malformed
    pub async fn fetch(&self) -> Result<SeriesFull> {
        let id = self
            .id()
            .ok_or_else(|| TvdbError::MissingElement("seriesid".to_string()))?;

        let mirror = self
            .context
            .mirrors
            .mirror_for(TYPE_XML)
            .ok_or_else(|| TvdbError::MissingElement("Mirror".to_string()))?;
        let base = format!(
            "{}/api/{}/series/{}",
            mirror.mirrorpath, self.context.api_key, id
        );

        let detail_url = format!("{}/all/{}.xml", base, self.context.language.abbreviation);
        let body = self.context.client.get(&detail_url).await?;
        let payload = parser::parse_series_detail(&body)?;

        let body = self.context.client.get(&format!("{}/actors.xml", base)).await?;
        let actors = parser::parse_actors(&body)?;

        let body = self.context.client.get(&format!("{}/banners.xml", base)).await?;
        let banners = parser::parse_banners(&body)?;

        let mut attributes = self.attributes.clone();
        attributes.merge(payload.attributes);

        Ok(SeriesFull {
            attributes,
            episodes: payload.episodes,
            actors,
            banners,
        })
    }
}

/// A series after its detail fetch (full record)
#[derive(Debug, Clone, Serialize)]
pub struct SeriesFull {
    attributes: Attributes,
    episodes: Vec<Episode>,
    actors: Vec<Actor>,
    banners: Vec<Banner>,
}

impl SeriesFull {
    /// Raw attribute access.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Merged attribute set (detail values over search values).
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Series id.
    pub fn id(&self) -> Option<u32> {
        self.attributes
            .get_parsed("id")
            .or_else(|| self.attributes.get_parsed("seriesid"))
    }

    /// Series name.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("SeriesName")
    }

    /// Genres, split from the pipe-separated `Genre` field.
    pub fn genres(&self) -> Vec<String> {
        self.attributes.pipe_list("Genre")
    }

    /// All episodes, in document order.
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// The series' cast.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// All banners attached to the series.
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::languages;
    use crate::mirrors::Mirror;

    fn test_context() -> Arc<SeriesContext> {
        let client = TvdbClient::with_config(ClientConfig::default()).unwrap();
        Arc::new(SeriesContext {
            api_key: "KEY".to_string(),
            language: languages::lookup("English").unwrap(),
            mirrors: MirrorList::new(vec![Mirror::new("http://thetvdb.com", 7)]),
            client: Arc::new(client),
        })
    }

    #[test]
    fn test_series_id_prefers_seriesid() {
        let mut attrs = Attributes::new();
        attrs.insert("seriesid", "76156");
        attrs.insert("id", "999");
        let series = Series::new(attrs, test_context());
        assert_eq!(series.id(), Some(76156));
    }

    #[test]
    fn test_series_id_falls_back_to_id() {
        let mut attrs = Attributes::new();
        attrs.insert("id", "76156");
        let series = Series::new(attrs, test_context());
        assert_eq!(series.id(), Some(76156));
    }

    #[test]
    fn test_series_context_accessors() {
        let series = Series::new(Attributes::new(), test_context());
        assert_eq!(series.api_key(), "KEY");
        assert_eq!(series.language().abbreviation, "en");
        assert_eq!(series.mirrors().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_without_id_fails() {
        let series = Series::new(Attributes::new(), test_context());
        match series.fetch().await {
            Err(TvdbError::MissingElement(name)) => assert_eq!(name, "seriesid"),
            other => panic!("Expected MissingElement, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_series_serialization_skips_context() {
        let mut attrs = Attributes::new();
        attrs.insert("SeriesName", "Scrubs");
        let series = Series::new(attrs, test_context());
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"attributes":{"SeriesName":"Scrubs"}}"#);
    }
}
