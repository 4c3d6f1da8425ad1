//! Mapping fetch outcomes to HTTP responses.
//!
//! | outcome          | status            | body                          |
//! |------------------|-------------------|-------------------------------|
//! | success          | 200               | `{"html": ...}`               |
//! | invalid URL      | 400               | `{"detail": "Invalid URL format"}` |
//! | upstream 4xx/5xx | upstream's status | `{"error": "HTTP error: <code>"}` |
//! | transport        | 500               | `{"error": "<description>"}`  |
//! | bad query string | 422               | `{"detail": ...}`             |

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::fetch::{FetchError, FetchedHtml};

impl IntoResponse for FetchedHtml {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            FetchError::InvalidInput => json!({ "detail": self.to_string() }),
            FetchError::UpstreamStatus(_) => json!({ "error": self.to_string() }),
            FetchError::Transport(message) => json!({ "error": message }),
        };
        (status, Json(body)).into_response()
    }
}

/// Response for a missing or undecodable `url` parameter.
pub fn query_rejection(rejection: QueryRejection) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": rejection.body_text() })),
    )
        .into_response()
}
