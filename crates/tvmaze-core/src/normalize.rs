//! Projection of raw catalog objects into display records
//!
//! Pure functions: no I/O, no reordering, no filtering. The only rule applied is
//! the poster fallback for shows.

use crate::schema::{RawEpisode, RawShow, RawShowEnvelope};
use crate::types::{EpisodeRecord, ShowRecord};

/// Pick the poster URL for a show.
///
/// Uses the medium-size image when it is present and non-empty, otherwise
/// `default_image`. Larger variants are never considered.
pub fn select_image(show: &RawShow, default_image: &str) -> String {
    show.image
        .as_ref()
        .and_then(|image| image.medium.as_deref())
        .filter(|url| !url.is_empty())
        .unwrap_or(default_image)
        .to_string()
}

/// Project one search hit into a `ShowRecord`.
pub fn normalize_show(envelope: RawShowEnvelope, default_image: &str) -> ShowRecord {
    let image = select_image(&envelope.show, default_image);
    let RawShow { id, name, summary, .. } = envelope.show;

    ShowRecord {
        id,
        name,
        summary,
        image,
    }
}

/// Project a whole search response, keeping the catalog's order.
pub fn normalize_shows(envelopes: Vec<RawShowEnvelope>, default_image: &str) -> Vec<ShowRecord> {
    envelopes
        .into_iter()
        .map(|envelope| normalize_show(envelope, default_image))
        .collect()
}

/// Project one raw episode into an `EpisodeRecord`.
pub fn normalize_episode(raw: RawEpisode) -> EpisodeRecord {
    EpisodeRecord {
        id: raw.id,
        name: raw.name,
        season: raw.season,
        number: raw.number,
    }
}

/// Project a whole episode listing, keeping the catalog's order.
pub fn normalize_episodes(raw: Vec<RawEpisode>) -> Vec<EpisodeRecord> {
    raw.into_iter().map(normalize_episode).collect()
}
