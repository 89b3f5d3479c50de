use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Wire format of the `Timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header row written once when the spreadsheet is created.
pub const HEADER: [&str; 3] = ["Timestamp", "Mood", "Note"];

/// One logged mood, as read back from the spreadsheet.
///
/// Entries are append-only: once a row is written it is never edited or
/// deleted by this service.
#[derive(Debug, Clone, Serialize)]
pub struct MoodEntry {
    pub timestamp: NaiveDateTime,
    /// Derived from `timestamp`; what the dashboard filters on.
    pub date: NaiveDate,
    /// Catalog tag (e.g. "happy"), not the display label.
    pub mood: String,
    /// Free text; an empty note is stored as an empty string.
    pub note: String,
}

impl MoodEntry {
    /// Parses one data row. Returns `None` for rows that are too short or
    /// carry an unparseable timestamp; callers skip those.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let timestamp = NaiveDateTime::parse_from_str(row.first()?, TIMESTAMP_FORMAT).ok()?;
        Some(Self {
            timestamp,
            date: timestamp.date(),
            mood: row.get(1)?.clone(),
            // Trailing empty cells are dropped by the sheets API
            note: row.get(2).cloned().unwrap_or_default(),
        })
    }

    /// Builds the row to append for a new entry.
    pub fn to_row(timestamp: NaiveDateTime, mood: &str, note: &str) -> Vec<String> {
        vec![
            timestamp.format(TIMESTAMP_FORMAT).to_string(),
            mood.to_string(),
            note.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_row_round_trip() {
        let row = MoodEntry::to_row(ts("2024-01-01 10:00:00"), "happy", "feeling good");
        assert_eq!(row, vec!["2024-01-01 10:00:00", "happy", "feeling good"]);

        let entry = MoodEntry::from_row(&row).unwrap();
        assert_eq!(entry.timestamp, ts("2024-01-01 10:00:00"));
        assert_eq!(entry.date, entry.timestamp.date());
        assert_eq!(entry.mood, "happy");
        assert_eq!(entry.note, "feeling good");
    }

    #[test]
    fn test_empty_note_round_trips_as_empty_string() {
        let row = MoodEntry::to_row(ts("2024-01-01 10:05:00"), "sad", "");
        assert_eq!(row[2], "");

        let entry = MoodEntry::from_row(&row).unwrap();
        assert_eq!(entry.note, "");
    }

    #[test]
    fn test_missing_note_cell_reads_as_empty() {
        let row = vec!["2024-01-01 10:05:00".to_string(), "sad".to_string()];
        let entry = MoodEntry::from_row(&row).unwrap();
        assert_eq!(entry.note, "");
    }

    #[test]
    fn test_short_or_malformed_rows_are_rejected() {
        assert!(MoodEntry::from_row(&[]).is_none());
        assert!(MoodEntry::from_row(&["2024-01-01 10:00:00".to_string()]).is_none());
        assert!(
            MoodEntry::from_row(&["yesterday".to_string(), "happy".to_string()]).is_none(),
            "non-conforming timestamp should not parse"
        );
    }
}
