//! The `GET /?url=...` handler.

use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
};

use crate::fetch::FetchRequest;
use crate::http::response::query_rejection;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Fetch the document named by the `url` query parameter.
pub async fn fetch_html(
    State(state): State<AppState>,
    query: Result<Query<FetchRequest>, QueryRejection>,
) -> Response {
    let start = Instant::now();

    let Query(request) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected query string");
            return query_rejection(rejection);
        }
    };

    let result = state.service.fetch(&request.url).await;

    match &result {
        Ok(page) => {
            tracing::info!(url = %request.url, bytes = page.html.len(), "Fetch succeeded");
            metrics::record_fetch("success", 200, start);
        }
        Err(e) => {
            tracing::warn!(
                url = %request.url,
                kind = e.kind(),
                status = e.status().as_u16(),
                error = %e,
                "Fetch failed"
            );
            metrics::record_fetch(e.kind(), e.status().as_u16(), start);
        }
    }

    result.into_response()
}
