//! Persisted scoreboard records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished game on the scoreboard
///
/// Serializes to the stored JSON layout as-is: field names are the document
/// keys, and `date` round-trips as an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Save instant in epoch milliseconds, stringified
    pub id: String,
    pub score: u32,
    pub moves: u32,
    /// Elapsed play time in whole seconds
    pub time: u32,
    pub date: DateTime<Utc>,
    pub won: bool,
}

impl ScoreEntry {
    /// Build an entry for a game finished at the given instant
    pub fn new(score: u32, moves: u32, time: u32, won: bool, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis().to_string(),
            score,
            moves,
            time,
            date: at,
            won,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_storage_layout() {
        let at = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        let entry = ScoreEntry::new(2048, 80, 200, true, at);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], at.timestamp_millis().to_string());
        assert_eq!(value["score"], 2048);
        assert_eq!(value["moves"], 80);
        assert_eq!(value["time"], 200);
        assert_eq!(value["won"], true);
        let date = value["date"].as_str().unwrap();
        assert!(date.starts_with("2026-08-25T12:00:00"));
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 9, 30, 15).unwrap();
        let entry = ScoreEntry::new(512, 130, 260, false, at);

        let doc = serde_json::to_string(&entry).unwrap();
        let back: ScoreEntry = serde_json::from_str(&doc).unwrap();
        assert_eq!(back, entry);
    }
}
