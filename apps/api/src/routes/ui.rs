//! Serves the embedded single-page analyzer UI.

use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../assets/web/index.html");

/// GET / - Serve the analyzer page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
