//! TVMaze Lookup Tauri Integration
//!
//! This crate provides Tauri commands for integrating show search and episode
//! listing into Tauri 2.0 applications.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tvmaze_tauri::LookupState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(LookupState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             tvmaze_tauri::commands::search_shows,
//!             tvmaze_tauri::commands::get_episodes,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `search_shows` - Search for shows by term
//! - `get_episodes` - Get the episode list of a show

pub mod commands;
pub mod handlers;

use std::sync::Arc;

use tvmaze_core::{ClientConfig, RemoteFetchError, TvMazeLookup};

/// Shared lookup service handed to every command.
///
/// Built once during app setup and registered with `app.manage`. The lookup
/// holds no mutable state, so commands share it without locking and several
/// lookups can be in flight at once.
#[derive(Debug, Clone)]
pub struct LookupState {
    lookup: Arc<TvMazeLookup>,
}

impl LookupState {
    /// Create a new LookupState against the public API.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, RemoteFetchError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a LookupState with custom client configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, RemoteFetchError> {
        Ok(Self::from_lookup(TvMazeLookup::with_config(config)?))
    }

    /// Wrap an already configured lookup.
    pub fn from_lookup(lookup: TvMazeLookup) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Get a reference to the inner lookup.
    pub fn lookup(&self) -> &TvMazeLookup {
        &self.lookup
    }
}
