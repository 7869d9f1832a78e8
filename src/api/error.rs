use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::ApiResponse;
use crate::error::AnalyzerError;

/// HTTP error carrying a status and message / HTTP错误
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::error(self.status.as_u16(), &self.message);
        (self.status, Json(body)).into_response()
    }
}

impl From<AnalyzerError> for ApiError {
    fn from(err: AnalyzerError) -> Self {
        let status = match err {
            AnalyzerError::MissingInput(_) => StatusCode::BAD_REQUEST,
            AnalyzerError::InvalidType { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AnalyzerError::AlreadyExists => StatusCode::CONFLICT,
            AnalyzerError::NotFound => StatusCode::NOT_FOUND,
            AnalyzerError::Unparsable(_) => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.to_string())
    }
}
