//! Display records handed to the presentation layer
//!
//! These are the normalized shapes produced by the lookups. They are rebuilt from
//! scratch on every call and never cached. All types implement Serialize and
//! Deserialize for JSON compatibility with Tauri.

use serde::{Deserialize, Serialize};

/// A show as returned by a search, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRecord {
    /// Catalog identifier, unique per show
    pub id: u32,
    /// Display name of the show
    pub name: String,
    /// Summary exactly as the catalog sent it, markup included.
    /// `None` when the catalog has no summary for the show.
    pub summary: Option<String>,
    /// Poster URL; never empty, falls back to the configured default image
    pub image: String,
}

/// An episode of a show, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Catalog identifier, unique per episode
    pub id: u32,
    /// Episode title
    pub name: String,
    /// Season number (1-based)
    pub season: u32,
    /// Episode number within the season (1-based)
    pub number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_record_serialization() {
        let show = ShowRecord {
            id: 139,
            name: "Girls".to_string(),
            summary: Some("<p>Four friends in New York.</p>".to_string()),
            image: "http://example.com/a.jpg".to_string(),
        };

        let json = serde_json::to_value(&show).unwrap();
        assert_eq!(json["id"], 139);
        assert_eq!(json["summary"], "<p>Four friends in New York.</p>");
        assert_eq!(json["image"], "http://example.com/a.jpg");
    }

    #[test]
    fn test_show_record_missing_summary_serializes_as_null() {
        let show = ShowRecord {
            id: 1,
            name: "Untitled".to_string(),
            summary: None,
            image: "http://example.com/a.jpg".to_string(),
        };

        let json = serde_json::to_value(&show).unwrap();
        assert!(json["summary"].is_null());
    }

    #[test]
    fn test_episode_record_serialization() {
        let episode = EpisodeRecord {
            id: 1,
            name: "Pilot".to_string(),
            season: 1,
            number: 1,
        };

        let json = serde_json::to_string(&episode).unwrap();
        let deserialized: EpisodeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, episode);
    }
}
