use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Spreadsheet lookup failed: {0}")]
    Lookup(String),

    #[error("Spreadsheet creation failed: {0}")]
    Create(String),

    #[error("Append failed: {0}")]
    Append(String),

    #[error("Read failed: {0}")]
    Read(String),

    #[error("Malformed sheet data: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Auth(_)
            | AppError::Lookup(_)
            | AppError::Create(_)
            | AppError::Append(_)
            | AppError::Read(_)
            | AppError::Parse(_) => {
                tracing::error!(error = %self, "Spreadsheet service error");
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::Http(e) => {
                tracing::error!(error = %e, "Upstream request error");
                (StatusCode::BAD_GATEWAY, "Upstream request failed".into())
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
