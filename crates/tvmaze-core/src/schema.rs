//! TVMaze API response types for deserialization.
//!
//! These structures mirror the JSON the catalog sends and mark the point where remote
//! data enters the crate. Only the fields the lookups consume are declared; anything
//! else in the payload is ignored. A body that lacks a required field fails to
//! deserialize and surfaces as `RemoteFetchError::Decode`.

use serde::Deserialize;

/// One hit from `/search/shows`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawShowEnvelope {
    /// Relevance score assigned by the catalog
    pub score: f64,
    /// The matched show
    pub show: RawShow,
}

/// Show object nested in a search hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawShow {
    pub id: u32,
    pub name: String,
    /// HTML summary; null or missing for sparse entries
    #[serde(default)]
    pub summary: Option<String>,
    /// Poster set; null when the catalog has no artwork
    #[serde(default)]
    pub image: Option<RawImage>,
}

/// Poster URLs in the sizes the catalog provides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

/// One entry from `/shows/{id}/episodes`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEpisode {
    pub id: u32,
    pub name: String,
    pub season: u32,
    pub number: u32,
}
