use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    use_cases::waitlist::{InsertOutcome, WaitlistEntry},
};

#[derive(Deserialize)]
struct SignupPayload {
    email: Option<String>,
    site: Option<String>,
}

#[derive(Deserialize)]
struct ListParams {
    site: Option<String>,
    export: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", get(list_entries).post(add_entry))
}

async fn add_entry(
    State(app_state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> AppResult<impl IntoResponse> {
    // Absent fields become empty strings so the presence check owns the 400.
    let email = payload.email.unwrap_or_default();
    let site = payload.site.unwrap_or_default();

    info!(email = %email, site = %site, "waitlist signup");

    let outcome = app_state.waitlist_use_cases.add_entry(&email, &site).await?;

    Ok(match outcome {
        InsertOutcome::Inserted(id) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Email added successfully", "id": id })),
        ),
        InsertOutcome::AlreadyExisted => (
            StatusCode::CONFLICT,
            Json(json!({ "message": "Email already exists for this site" })),
        ),
    })
}

async fn list_entries(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Response> {
    let site = params.site.as_deref();

    if params.export.as_deref() == Some("true") {
        let csv = app_state.waitlist_use_cases.export_csv(site).await?;
        let headers = [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=waitlist.csv",
            ),
        ];
        return Ok((headers, csv).into_response());
    }

    let entries: Vec<WaitlistEntry> = app_state.waitlist_use_cases.list_entries(site).await?;
    Ok(Json(json!({
        "site": site.unwrap_or("all"),
        "count": entries.len(),
        "emails": entries,
    }))
    .into_response())
}
