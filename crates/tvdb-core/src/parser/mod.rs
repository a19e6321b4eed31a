//! XML parsers for TheTVDB payloads
//!
//! One parser per endpoint payload:
//! - `search`: `GetSeries.php` search results
//! - `series`: series detail with episode list
//! - `actors`: actor list
//! - `banners`: banner list
//! - `mirrors`: mirror directory
//!
//! All build on `xml`, the generic XML-to-tree layer.

pub mod actors;
pub mod banners;
pub mod mirrors;
pub mod search;
pub mod series;
pub mod xml;

// Re-export main parsing functions
pub use actors::parse_actors;
pub use banners::parse_banners;
pub use mirrors::parse_mirror_list;
pub use search::parse_search;
pub use series::{parse_series_detail, SeriesPayload};
pub use xml::{parse_document, Element};
