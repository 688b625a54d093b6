//! Route definitions for the HTML pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at the site root.
///
/// ```text
/// GET /                 -> home
/// GET /projects/{slug}  -> project_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/projects/{slug}", get(pages::project_detail))
}
