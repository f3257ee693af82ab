use super::{ContentType, GameDataEntry};
use chrono::{DateTime, Utc};
use core::time::Duration;
use serde::Serialize;
use std::collections::BTreeMap;

/// The aggregate result of collecting information about one game.
#[derive(Debug, Clone, Serialize)]
pub struct GameDataResponse {
    /// The queried name, echoed verbatim.
    pub game_name: String,

    /// When this response was assembled.
    pub collection_timestamp: DateTime<Utc>,

    /// Deduplicated entries in the order they survived.
    pub entries: Vec<GameDataEntry>,

    pub stats: CollectionStats,
}

/// Summary statistics derived from a response's entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    pub total_entries: usize,
    pub entries_by_type: BTreeMap<ContentType, usize>,
    pub average_reliability: f64,

    /// Wall-clock seconds spent collecting.
    pub collection_duration: f64,
}

impl GameDataResponse {
    #[must_use]
    pub fn new(game_name: impl Into<String>, entries: Vec<GameDataEntry>, collection_duration: Duration) -> Self {
        let stats = CollectionStats::from_entries(&entries, collection_duration);
        Self {
            game_name: game_name.into(),
            collection_timestamp: Utc::now(),
            entries,
            stats,
        }
    }
}

impl CollectionStats {
    /// Compute statistics in a single pass over `entries`.
    #[must_use]
    pub fn from_entries(entries: &[GameDataEntry], collection_duration: Duration) -> Self {
        let mut entries_by_type = BTreeMap::new();
        let mut total_reliability = 0.0;

        for entry in entries {
            *entries_by_type.entry(entry.content_type()).or_insert(0) += 1;
            total_reliability += entry.reliability_score();
        }

        #[expect(clippy::cast_precision_loss, reason = "entry counts are far below 2^52")]
        let average_reliability = if entries.is_empty() {
            0.0
        } else {
            total_reliability / entries.len() as f64
        };

        Self {
            total_entries: entries.len(),
            entries_by_type,
            average_reliability,
            collection_duration: collection_duration.as_secs_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::SiteSpecific;

    fn entry(url: &str, score: f64, content_type: ContentType) -> GameDataEntry {
        GameDataEntry::new(format!("content for {url}"), url, score, content_type, SiteSpecific::new()).unwrap()
    }

    #[test]
    fn test_stats_for_empty_entries() {
        let stats = CollectionStats::from_entries(&[], Duration::ZERO);
        assert_eq!(stats.total_entries, 0);
        assert!(stats.entries_by_type.is_empty());
        assert!(stats.average_reliability.abs() < f64::EPSILON);
        assert!(stats.collection_duration.abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_counts_and_average() {
        let entries = vec![
            entry("https://a.com/1", 8.0, ContentType::Fandom),
            entry("https://a.com/2", 6.0, ContentType::Fandom),
            entry("https://b.com/1", 7.0, ContentType::Ign),
        ];

        let stats = CollectionStats::from_entries(&entries, Duration::from_millis(1500));

        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.entries_by_type.get(&ContentType::Fandom), Some(&2));
        assert_eq!(stats.entries_by_type.get(&ContentType::Ign), Some(&1));
        assert_eq!(stats.entries_by_type.values().sum::<usize>(), stats.total_entries);
        assert!((stats.average_reliability - 7.0).abs() < 1e-9);
        assert!((stats.collection_duration - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_response_echoes_game_name() {
        let response = GameDataResponse::new("  The Last of Us ", vec![entry("https://a.com", 5.0, ContentType::Youtube)], Duration::ZERO);
        assert_eq!(response.game_name, "  The Last of Us ");
        assert_eq!(response.stats.total_entries, response.entries.len());
    }

    #[test]
    fn test_response_serializes_type_counts_by_tag() {
        let response = GameDataResponse::new("Game", vec![entry("https://a.com", 5.0, ContentType::Gamespot)], Duration::ZERO);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["game_name"], "Game");
        assert_eq!(value["stats"]["total_entries"], 1);
        assert_eq!(value["stats"]["entries_by_type"]["GAMESPOT"], 1);
        assert_eq!(value["entries"].as_array().map(Vec::len), Some(1));
    }
}
