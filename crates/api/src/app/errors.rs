use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use fulfilment_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidRequest(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_request", msg),
        DomainError::Unprocessable(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity", msg)
        }
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        DomainError::Unavailable(msg) => {
            tracing::warn!(error = %msg, "collaborator unavailable");
            json_error(StatusCode::SERVICE_UNAVAILABLE, "unavailable", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
