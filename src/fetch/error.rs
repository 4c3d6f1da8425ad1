//! Per-call failure type.

use axum::http::StatusCode;
use thiserror::Error;

/// Why a fetch call did not produce a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The URL did not match the accepted shape. No network access happened.
    #[error("Invalid URL format")]
    InvalidInput,

    /// The upstream answered with a 4xx or 5xx status. Its body is discarded.
    #[error("HTTP error: {}", .0.as_u16())]
    UpstreamStatus(StatusCode),

    /// Anything below the HTTP status layer: DNS, connect, TLS, timeout,
    /// body decoding.
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// Build a transport failure from a client error, keeping its source chain.
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            // reqwest and hyper often repeat the inner message verbatim
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        FetchError::Transport(message)
    }

    /// HTTP status reported to the caller for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            FetchError::InvalidInput => StatusCode::BAD_REQUEST,
            FetchError::UpstreamStatus(status) => *status,
            FetchError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidInput => "invalid_input",
            FetchError::UpstreamStatus(_) => "upstream_status",
            FetchError::Transport(_) => "transport",
        }
    }
}
