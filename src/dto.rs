//! Request/response DTOs for the mood API.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Shape-only validation is expressed via `validator` derive macros;
//!   catalog membership is checked in the handler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::stats::MoodCount;

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/moods
#[derive(Debug, Deserialize, Validate)]
pub struct LogMoodRequest {
    /// Catalog tag (e.g. "happy"), not the display label
    #[validate(length(min = 1, max = 50, message = "Mood tag must be 1-50 characters"))]
    pub mood: String,

    /// Optional free text; omitted or empty both store an empty string
    #[serde(default)]
    #[validate(length(max = 5000, message = "Note must be under 5000 characters"))]
    pub note: String,
}

/// GET /api/summary query params
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Day to summarize. Default: newest day with data, else today.
    pub date: Option<NaiveDate>,
}

/// One selectable mood, label and stored tag
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub label: &'static str,
    pub tag: &'static str,
}

/// One row of the recent-entries table
#[derive(Debug, Serialize)]
pub struct RecentEntry {
    /// `HH:MM`, the way the dashboard table shows it
    pub time: String,
    pub mood: String,
    pub label: String,
    pub note: String,
}

/// GET /api/summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub selected_date: NaiveDate,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub counts: Vec<MoodCount>,
    pub recent: Vec<RecentEntry>,
    /// All entries ever logged, across every date
    pub total_entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_url: Option<String>,
    pub catalog: Vec<CatalogEntry>,
    /// `HH:MM:SS` server clock, shown in the page footer
    pub last_updated: String,
    pub refresh_interval_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_mood_request_note_defaults_to_empty() {
        let req: LogMoodRequest = serde_json::from_str(r#"{"mood": "happy"}"#).unwrap();
        assert_eq!(req.mood, "happy");
        assert_eq!(req.note, "");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_log_mood_request_rejects_empty_mood() {
        let req: LogMoodRequest = serde_json::from_str(r#"{"mood": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_log_mood_request_rejects_oversized_note() {
        let req = LogMoodRequest {
            mood: "happy".into(),
            note: "x".repeat(5001),
        };
        assert!(req.validate().is_err());
    }
}
