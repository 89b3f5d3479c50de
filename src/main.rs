use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod catalog;
mod config;
mod dto;
mod error;
mod handlers;
mod models;
mod sheets;
mod stats;
mod store;

use config::Config;
use sheets::{ServiceAccountKey, SheetsClient};
use store::MoodStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<MoodStore>,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/api/summary", get(handlers::moods::get_summary))
        .route("/api/moods", post(handlers::moods::log_mood))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodboard_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    let config = Arc::new(config);

    let key = ServiceAccountKey::from_json(&config.credentials_json)
        .expect("GOOGLE_CREDENTIALS_JSON must hold a service-account key");
    tracing::info!(
        project = ?key.project_id,
        account = %key.client_email,
        "Loaded service-account credential"
    );
    let client = SheetsClient::new(key).expect("Failed to build Sheets client");
    let store = Arc::new(MoodStore::new(client, config.spreadsheet_name.clone()));

    let state = AppState {
        config: config.clone(),
        store,
    };

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app(state)).await.unwrap();
}
