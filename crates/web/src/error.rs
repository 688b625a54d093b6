use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Application-level error type for HTTP handlers.
///
/// Store failures never reach this type: the showcase loader degrades to
/// fallback data instead of erroring. What remains is template rendering,
/// mapped to a plain 500 page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Template(err) => {
                tracing::error!(error = %err, "template rendering failed");
            }
        }
        (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
    }
}

/// Static last-resort page; templates are unavailable when we get here.
const ERROR_PAGE: &str = "<!DOCTYPE html>\
<html lang=\"en\"><head><meta charset=\"UTF-8\"><title>Something went wrong</title></head>\
<body><h1>Something went wrong</h1><p>Please try again later.</p></body></html>";
