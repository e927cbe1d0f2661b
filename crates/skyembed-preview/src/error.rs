//! Error types for the preview service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since embeds are shown to people, not parsed by programs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Preview service error type.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The request body or query could not be understood.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl From<serde_json::Error> for PreviewError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(format!("invalid JSON: {err}"))
    }
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::BadRequest(msg) => {
                tracing::debug!(error = %msg, "rejecting request");
                (
                    StatusCode::BAD_REQUEST,
                    "Bad Request",
                    format!("The request could not be rendered: {msg}"),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
