use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tradegate_core::ServiceError;

/// Translate a service error into the boundary's JSON error shape.
///
/// Read-path ownership mismatches arrive here already folded into `NotFound`;
/// delete-path mismatches keep their own variant and their own status.
pub fn error_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::NotFound(message) => json_error(StatusCode::NOT_FOUND, message),
        ServiceError::OwnershipViolation(message) => json_error(StatusCode::BAD_REQUEST, message),
        ServiceError::ValidationFailed(errors) => {
            let errors: Vec<_> = errors
                .into_iter()
                .map(|e| json!({ "field": e.field, "message": e.message }))
                .collect();
            (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                    "message": "validation failed",
                    "errors": errors,
                })),
            )
                .into_response()
        }
        ServiceError::Upstream(message) => {
            tracing::error!("upstream fault: {message}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "status": status.as_u16(),
            "message": message.into(),
        })),
    )
        .into_response()
}
