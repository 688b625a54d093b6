//! Handlers for the HTML pages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tera::Context;

use folio_db::showcase;

use crate::error::AppResult;
use crate::site;
use crate::state::AppState;
use crate::templates;

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let listing = showcase::load(&state.pool, &state.bootstrap).await;

    let mut context = Context::new();
    context.insert(
        "title",
        "Girindra Sulistiyo Wardoyo | Mobile Developer",
    );
    context.insert("profile", &site::PROFILE);
    context.insert("projects", &listing.projects);
    context.insert("experiences", site::EXPERIENCES);
    context.insert("tech_stack", site::TECH_STACK);

    Ok(Html(templates::render("home.html", &context)?))
}

/// GET /projects/{slug}
///
/// An unknown slug is a normal outcome and renders the not-found page with
/// a 404 status, not an error.
pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    match showcase::find_by_slug(&state.pool, &state.bootstrap, &slug).await {
        Some(project) => {
            let mut context = Context::new();
            context.insert("title", &format!("{} | Project Detail", project.name));
            context.insert("project", &project);

            let body = templates::render("project.html", &context)?;
            Ok(Html(body).into_response())
        }
        None => {
            let mut context = Context::new();
            context.insert("title", "Project Not Found");

            let body = templates::render("not_found.html", &context)?;
            Ok((StatusCode::NOT_FOUND, Html(body)).into_response())
        }
    }
}
