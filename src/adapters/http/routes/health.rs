use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

use crate::adapters::http::app_state::AppState;

/// Liveness plus a round-trip to the database. Storage being down degrades
/// the response to a 500 body; it never takes the surface down with it.
pub async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    match app_state.waitlist_use_cases.db_time().await {
        Ok(db_time) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": Utc::now(),
                "database": "connected",
                "db_time": db_time,
            })),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "Database connection failed",
                "error": err.to_string(),
            })),
        ),
    }
}
