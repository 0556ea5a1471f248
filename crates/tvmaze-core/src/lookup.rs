//! Show and episode lookups
//!
//! This module provides the two operations consumers call: a keyword search that
//! returns normalized shows, and an episode listing for one show. Each call is a
//! single request/response transaction; nothing is cached between calls.

use tracing::debug;

use crate::client::{ClientConfig, TvMazeClient};
use crate::error::Result;
use crate::normalize::{normalize_episodes, normalize_shows};
use crate::schema::{RawEpisode, RawShowEnvelope};
use crate::types::{EpisodeRecord, ShowRecord};

/// Lookup API for the TVMaze catalog
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvMazeLookup;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let lookup = TvMazeLookup::new()?;
///
///     let shows = lookup.search_shows("Girls").await?;
///     if let Some(show) = shows.first() {
///         let episodes = lookup.get_episodes(&show.id.to_string()).await?;
///         println!("{} has {} episodes", show.name, episodes.len());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TvMazeLookup {
    client: TvMazeClient,
    default_image_url: String,
}

impl TvMazeLookup {
    /// Create a lookup against the public API with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a lookup from a custom configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TvMazeClient::with_config(&config)?;
        Ok(Self::with_client(client, config.default_image_url))
    }

    /// Create a lookup around an existing client.
    pub fn with_client(client: TvMazeClient, default_image_url: impl Into<String>) -> Self {
        Self {
            client,
            default_image_url: default_image_url.into(),
        }
    }

    /// Poster URL substituted for shows without artwork
    pub fn default_image_url(&self) -> &str {
        &self.default_image_url
    }

    /// Search the catalog for shows matching `term`.
    ///
    /// The term is sent verbatim (no trimming or validation); an empty term is a
    /// legal query. Results keep the catalog's relevance order.
    ///
    /// # Returns
    /// * `Ok(Vec<ShowRecord>)` - possibly empty
    /// * `Err(RemoteFetchError)` - request failed, non-success status or malformed body
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeLookup;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::RemoteFetchError> {
    /// let lookup = TvMazeLookup::new()?;
    /// for show in lookup.search_shows("Girls").await? {
    ///     println!("{} ({}) {}", show.name, show.id, show.image);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<ShowRecord>> {
        let url = self.client.endpoint(&["search", "shows"])?;
        let envelopes: Vec<RawShowEnvelope> = self.client.get_json(url, &[("q", term)]).await?;

        let shows = normalize_shows(envelopes, &self.default_image_url);
        debug!(term, count = shows.len(), "Show search finished");
        Ok(shows)
    }

    /// Fetch the episode list of one show.
    ///
    /// `show_id` is the string form of a `ShowRecord::id`; it is not validated
    /// locally. An unknown id surfaces as `RemoteFetchError::NotFound`.
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeLookup;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::RemoteFetchError> {
    /// let lookup = TvMazeLookup::new()?;
    /// for ep in lookup.get_episodes("139").await? {
    ///     println!("S{:02}E{:02} {}", ep.season, ep.number, ep.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_episodes(&self, show_id: &str) -> Result<Vec<EpisodeRecord>> {
        let url = self.client.endpoint(&["shows", show_id, "episodes"])?;
        let raw: Vec<RawEpisode> = self.client.get_json(url, &[]).await?;

        let episodes = normalize_episodes(raw);
        debug!(show_id, count = episodes.len(), "Episode listing finished");
        Ok(episodes)
    }
}
