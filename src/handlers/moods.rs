use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use validator::Validate;

use crate::catalog;
use crate::dto::{
    CatalogEntry, LogMoodRequest, MessageResponse, RecentEntry, SummaryQuery, SummaryResponse,
};
use crate::error::{AppError, AppResult};
use crate::sheets;
use crate::stats;
use crate::AppState;

pub async fn log_mood(
    State(state): State<AppState>,
    Json(body): Json<LogMoodRequest>,
) -> AppResult<Json<MessageResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if !catalog::is_known_tag(&body.mood) {
        return Err(AppError::Validation(format!(
            "Unknown mood tag {:?}",
            body.mood
        )));
    }

    state.store.log(&body.mood, &body.note).await?;
    tracing::info!(mood = %body.mood, "Mood logged");

    Ok(Json(MessageResponse {
        message: "Mood logged successfully!".into(),
    }))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<SummaryResponse>> {
    let (entries, sheet_id) = state.store.load_all().await;

    // With no data both bounds collapse to today, same as the original UI
    let today = Local::now().date_naive();
    let (min_date, max_date) = stats::date_bounds(&entries).unwrap_or((today, today));
    let selected_date = query.date.unwrap_or(max_date);

    let counts = stats::tally(&entries, selected_date);
    let recent = stats::recent(&entries, selected_date, state.config.recent_limit)
        .into_iter()
        .map(|e| RecentEntry {
            time: e.timestamp.format("%H:%M").to_string(),
            label: catalog::label_for_tag(&e.mood)
                .map(str::to_string)
                .unwrap_or_else(|| e.mood.clone()),
            mood: e.mood,
            note: e.note,
        })
        .collect();

    Ok(Json(SummaryResponse {
        selected_date,
        min_date,
        max_date,
        counts,
        recent,
        total_entries: entries.len(),
        sheet_url: sheet_id.as_deref().map(sheets::sheet_url),
        catalog: catalog::MOODS
            .iter()
            .map(|m| CatalogEntry {
                label: m.label,
                tag: m.tag,
            })
            .collect(),
        last_updated: Local::now().format("%H:%M:%S").to_string(),
        refresh_interval_secs: state.config.refresh_interval_secs,
    }))
}
