use axum::{
    http::{header::RETRY_AFTER, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::error::Error;
use crate::models::Category;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid category")]
    InvalidCategory { valid: Vec<&'static str> },

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid JSON body")]
    InvalidJson,

    #[error("Invalid request")]
    InvalidRequest { details: String },

    #[error("Invalid answers for category")]
    InvalidAnswers {
        category: Category,
        details: Vec<String>,
    },

    #[error("Not found")]
    NotFound,

    #[error("Too many requests")]
    TooManyRequests { retry_after_secs: u64 },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Invalid answers for `category`, from a library parse error.
    pub fn answers(category: Category, err: Error) -> Self {
        let details = match err {
            Error::InvalidAnswers(errors) => errors.into_iter().map(|e| e.message).collect(),
            other => vec![other.to_string()],
        };
        ApiError::InvalidAnswers { category, details }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> Value {
        let error = self.to_string();
        match self {
            ApiError::InvalidCategory { valid } => {
                json!({ "error": error, "validCategories": valid })
            }
            ApiError::InvalidRequest { details } => json!({ "error": error, "details": details }),
            ApiError::InvalidAnswers { category, details } => {
                json!({ "error": error, "category": category, "details": details })
            }
            ApiError::TooManyRequests { retry_after_secs } => {
                json!({ "error": error, "retryAfterSeconds": retry_after_secs })
            }
            _ => json!({ "error": error }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(self.body());

        match self {
            ApiError::TooManyRequests { retry_after_secs } => {
                (status, [(RETRY_AFTER, retry_after_secs.to_string())], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationError, ValidationErrorKind};

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidJson.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::TooManyRequests { retry_after_secs: 60 }.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_bodies() {
        let body = ApiError::bad_request("limit must be between 1 and 50").body();
        assert_eq!(body, json!({ "error": "limit must be between 1 and 50" }));

        let body = ApiError::InvalidCategory { valid: vec!["mice", "audio"] }.body();
        assert_eq!(body["validCategories"], json!(["mice", "audio"]));

        let body = ApiError::TooManyRequests { retry_after_secs: 60 }.body();
        assert_eq!(body, json!({ "error": "Too many requests", "retryAfterSeconds": 60 }));
    }

    #[test]
    fn test_answers_error_details() {
        let err = Error::InvalidAnswers(vec![ValidationError {
            kind: ValidationErrorKind::MissingSelection,
            message: "'grip-style' requires at least one selection".to_string(),
        }]);
        let body = ApiError::answers(Category::Mouse, err).body();
        assert_eq!(body["error"], "Invalid answers for category");
        assert_eq!(body["category"], "mouse");
        assert_eq!(body["details"][0], "'grip-style' requires at least one selection");
    }

    #[test]
    fn test_retry_after_header() {
        let response = ApiError::TooManyRequests { retry_after_secs: 60 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[RETRY_AFTER], "60");
    }
}
