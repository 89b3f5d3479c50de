use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "moodboard-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readyz(State(state): State<AppState>) -> Json<Value> {
    // The handle resolves lazily on first use, so "pending" only means no
    // request has needed the sheet yet. Requests degrade rather than fail,
    // so the service is ready either way.
    let spreadsheet = match state.store.sheet_url() {
        Some(_) => "resolved",
        None => "pending",
    };

    Json(json!({
        "status": "ready",
        "checks": { "spreadsheet": spreadsheet },
    }))
}
