//! TheTVDB Legacy XML API Client
//!
//! This crate provides a client for TheTVDB's legacy XML web service.
//!
//! # Features
//! - Search for TV series by name
//! - Lazily fetch full series detail: episodes, actors, banners
//! - Bounded fixed-interval retries for transient failures
//! - API key resolution from an explicit value or a `~/.tvdb` dotfile
//! - Mirror directory handling for detail and asset URLs

pub mod client;
pub mod config;
pub mod error;
pub mod languages;
pub mod mirrors;
pub mod parser;
pub mod series;
pub mod tvdb;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, TvdbClient};
pub use config::TvdbBuilder;
pub use error::{Result, TvdbError};
pub use languages::Language;
pub use mirrors::{Mirror, MirrorList};
pub use series::{Series, SeriesContext, SeriesFull};
pub use tvdb::Tvdb;
pub use types::{Actor, Attributes, Banner, Episode};
