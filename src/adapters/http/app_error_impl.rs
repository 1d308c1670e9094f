use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        let message = self.to_string();
        match self {
            AppError::MissingField => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::MissingField, message, None)
            }
            AppError::InvalidEmailFormat => error_resp(
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidEmailFormat,
                message,
                None,
            ),
            AppError::Database(detail) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::DatabaseError,
                "Internal server error".into(),
                Some(detail),
            ),
            AppError::Internal(detail) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                "Internal server error".into(),
                Some(detail),
            ),
        }
    }
}

fn error_resp(
    status: StatusCode,
    code: ErrorCode,
    message: String,
    detail: Option<String>,
) -> Response {
    let body = match detail {
        Some(err) => {
            serde_json::json!({ "code": code.as_str(), "message": message, "error": err })
        }
        None => serde_json::json!({ "code": code.as_str(), "message": message }),
    };
    (status, Json(body)).into_response()
}
