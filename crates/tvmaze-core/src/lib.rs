//! TVMaze Lookup Core Library
//!
//! This crate provides show search and episode listing against the public
//! TVMaze catalog (<https://www.tvmaze.com/api>), normalized into fixed-shape
//! display records.
//!
//! # Features
//! - Search for shows by free-text term
//! - List the episodes of a show
//! - Poster fallback for shows without artwork
//! - Strict response schemas: malformed catalog data is reported, never passed on

pub mod client;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod schema;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, TvMazeClient, DEFAULT_IMAGE_URL, TVMAZE_BASE_URL};
pub use error::{RemoteFetchError, Result};
pub use lookup::TvMazeLookup;
pub use types::{EpisodeRecord, ShowRecord};
