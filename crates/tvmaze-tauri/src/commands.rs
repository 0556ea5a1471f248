//! Tauri commands for TVMaze lookups
//!
//! This module contains all Tauri commands that can be invoked from the frontend.
//! Errors cross the IPC boundary as their display string.

use tauri::State;

use crate::handlers;
use crate::LookupState;
use tvmaze_core::{EpisodeRecord, RemoteFetchError, ShowRecord};

/// Search for shows by term.
///
/// # Arguments
/// * `term` - Search term, sent to the catalog as-is
///
/// # Returns
/// * `Ok(Vec<ShowRecord>)` with matching shows in relevance order
/// * `Err(RemoteFetchError)` if the lookup fails
#[tauri::command]
pub async fn search_shows(
    state: State<'_, LookupState>,
    term: String,
) -> Result<Vec<ShowRecord>, RemoteFetchError> {
    handlers::search_shows(state.inner(), &term).await
}

/// Get the episode list of a show.
///
/// # Arguments
/// * `show_id` - Catalog ID of the show, as rendered from a `ShowRecord`
///
/// # Returns
/// * `Ok(Vec<EpisodeRecord>)` in catalog order
/// * `Err(RemoteFetchError)` if the lookup fails
#[tauri::command]
pub async fn get_episodes(
    state: State<'_, LookupState>,
    show_id: String,
) -> Result<Vec<EpisodeRecord>, RemoteFetchError> {
    handlers::get_episodes(state.inner(), &show_id).await
}
