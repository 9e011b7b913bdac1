use crate::logic::ValidationError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Errors surfaced to API clients
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be read as a recommendation request
    BadRequest { status: StatusCode, message: String },
    /// Body was well formed but a field is outside its domain
    Validation(ValidationError),
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { status, .. } => *status,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Missing or mistyped fields are a 400 here, not axum's 422, which is
        // reserved for domain validation
        let status = match &rejection {
            JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
            _ => rejection.status(),
        };
        ApiError::BadRequest {
            status,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::BadRequest { message, .. } => serde_json::json!({ "error": message }),
            ApiError::Validation(err) => serde_json::json!({
                "error": err.to_string(),
                "field": err.field,
                "value": err.value,
                "allowed": err.allowed.to_json(),
            }),
            ApiError::NotFound => serde_json::json!({ "error": "not found" }),
        };

        (status, Json(body)).into_response()
    }
}
