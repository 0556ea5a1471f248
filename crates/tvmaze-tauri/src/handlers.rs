//! Command handlers behind the Tauri commands
//!
//! Plain async functions so they can be driven without a running Tauri app.
//! A failed lookup is logged and returned unchanged; no retry, no fallback result.

use tracing::warn;

use crate::LookupState;
use tvmaze_core::{EpisodeRecord, RemoteFetchError, ShowRecord};

/// Run a show search for the frontend.
pub async fn search_shows(
    state: &LookupState,
    term: &str,
) -> Result<Vec<ShowRecord>, RemoteFetchError> {
    state
        .lookup()
        .search_shows(term)
        .await
        .inspect_err(|e| warn!(term, error = %e, "Show search failed"))
}

/// Fetch the episodes of one show for the frontend.
pub async fn get_episodes(
    state: &LookupState,
    show_id: &str,
) -> Result<Vec<EpisodeRecord>, RemoteFetchError> {
    state
        .lookup()
        .get_episodes(show_id)
        .await
        .inspect_err(|e| warn!(show_id, error = %e, "Episode listing failed"))
}
