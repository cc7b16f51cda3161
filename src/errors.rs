use crate::models::ErrorResponse;
use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

/// Message returned when the request carries no image URL
pub const MISSING_IMAGE_URL: &str = "이미지 URL이 필요합니다";

/// Errors surfaced by HTTP handlers as non-200 JSON responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", MISSING_IMAGE_URL)]
    MissingImageUrl,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ApiError {
    fn body(&self) -> ErrorResponse {
        let status_code = self.status_code().as_u16();
        match self {
            ApiError::MissingImageUrl => ErrorResponse {
                error: MISSING_IMAGE_URL.to_string(),
                message: "image_url field is required".to_string(),
                status_code,
            },
            ApiError::InvalidJson(message) => ErrorResponse {
                error: "invalid_json".to_string(),
                message: format!("Invalid JSON: {}", message),
                status_code,
            },
            ApiError::Internal(message) => ErrorResponse {
                error: message.clone(),
                message: "Internal server error".to_string(),
                status_code,
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingImageUrl | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}
