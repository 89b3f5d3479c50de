//! Pure aggregation over loaded entries. No hidden state: everything is a
//! function of the entry slice and the selected date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::mood::MoodEntry;

/// One bar of the per-day chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

/// Per-mood counts for one day. Order is first-seen order among that day's
/// entries; it carries no meaning beyond chart stability.
pub fn tally(entries: &[MoodEntry], date: NaiveDate) -> Vec<MoodCount> {
    let mut counts: Vec<MoodCount> = Vec::new();
    for entry in entries.iter().filter(|e| e.date == date) {
        match counts.iter_mut().find(|c| c.mood == entry.mood) {
            Some(existing) => existing.count += 1,
            None => counts.push(MoodCount {
                mood: entry.mood.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// The `limit` newest entries for one day, newest first.
pub fn recent(entries: &[MoodEntry], date: NaiveDate, limit: usize) -> Vec<MoodEntry> {
    let mut matching: Vec<MoodEntry> = entries
        .iter()
        .filter(|e| e.date == date)
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matching.truncate(limit);
    matching
}

/// Min/max dates present in the data, when there is any.
pub fn date_bounds(entries: &[MoodEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let min = entries.iter().map(|e| e.date).min()?;
    let max = entries.iter().map(|e| e.date).max()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;

    fn entry(ts: &str, mood: &str, note: &str) -> MoodEntry {
        let timestamp = NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap();
        MoodEntry {
            timestamp,
            date: timestamp.date(),
            mood: mood.into(),
            note: note.into(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_tally_counts_only_selected_date() {
        let entries = vec![
            entry("2024-01-01 09:00:00", "happy", ""),
            entry("2024-01-01 12:00:00", "happy", ""),
            entry("2024-01-01 15:00:00", "sad", ""),
            entry("2024-01-02 09:00:00", "happy", ""),
        ];

        let counts = tally(&entries, day("2024-01-01"));
        assert_eq!(
            counts,
            vec![
                MoodCount { mood: "happy".into(), count: 2 },
                MoodCount { mood: "sad".into(), count: 1 },
            ]
        );

        let total: usize = counts.iter().map(|c| c.count).sum();
        let matching = entries.iter().filter(|e| e.date == day("2024-01-01")).count();
        assert_eq!(total, matching);
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let entries = vec![
            entry("2024-01-01 09:00:00", "neutral", ""),
            entry("2024-01-01 10:00:00", "excited", ""),
            entry("2024-01-01 11:00:00", "neutral", ""),
        ];

        let counts = tally(&entries, day("2024-01-01"));
        let moods: Vec<&str> = counts.iter().map(|c| c.mood.as_str()).collect();
        assert_eq!(moods, vec!["neutral", "excited"]);
    }

    #[test]
    fn test_recent_sorted_newest_first_and_limited() {
        let entries: Vec<MoodEntry> = (1..=8)
            .map(|h| entry(&format!("2024-01-01 {h:02}:00:00"), "happy", ""))
            .collect();

        let top = recent(&entries, day("2024-01-01"), 5);
        assert_eq!(top.len(), 5);
        for pair in top.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
        assert_eq!(top[0].timestamp.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn test_recent_excludes_other_dates() {
        let entries = vec![
            entry("2024-01-01 09:00:00", "happy", ""),
            entry("2024-01-02 09:00:00", "sad", ""),
        ];

        let top = recent(&entries, day("2024-01-02"), 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].mood, "sad");
    }

    // The worked scenario: happy@10:00 with a note, sad@10:05 without.
    #[test]
    fn test_submission_scenario() {
        let entries = vec![
            entry("2024-01-01 10:00:00", "happy", "feeling good"),
            entry("2024-01-01 10:05:00", "sad", ""),
        ];

        let counts = tally(&entries, day("2024-01-01"));
        assert_eq!(
            counts,
            vec![
                MoodCount { mood: "happy".into(), count: 1 },
                MoodCount { mood: "sad".into(), count: 1 },
            ]
        );

        let top = recent(&entries, day("2024-01-01"), 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].mood, "sad");
        assert_eq!(top[0].note, "");
        assert_eq!(top[1].mood, "happy");
        assert_eq!(top[1].note, "feeling good");
    }

    #[test]
    fn test_empty_date_yields_empty_results() {
        let entries = vec![entry("2024-01-01 10:00:00", "happy", "")];
        assert!(tally(&entries, day("2024-03-01")).is_empty());
        assert!(recent(&entries, day("2024-03-01"), 5).is_empty());
    }

    #[test]
    fn test_date_bounds() {
        assert_eq!(date_bounds(&[]), None);

        let entries = vec![
            entry("2024-01-05 10:00:00", "happy", ""),
            entry("2024-01-01 10:00:00", "sad", ""),
            entry("2024-01-03 10:00:00", "neutral", ""),
        ];
        assert_eq!(
            date_bounds(&entries),
            Some((day("2024-01-01"), day("2024-01-05")))
        );
    }
}
