//! Read path: the current decorated project list, tolerating total store
//! unavailability.

use serde::Serialize;

use folio_core::catalog;
use folio_core::project::{decorate_all, DecoratedProject};

use crate::bootstrap::Bootstrap;
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Where a [`Showcase`] got its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataSource {
    Database,
    Fallback,
}

/// The decorated project list handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Showcase {
    pub source: DataSource,
    pub projects: Vec<DecoratedProject>,
}

/// Load the current project list in ascending id order.
///
/// Resolves the one-time setup first, then reads. A read error and an empty
/// table both degrade to the static fallback list; neither is surfaced to
/// the caller as an error.
pub async fn load(pool: &DbPool, bootstrap: &Bootstrap) -> Showcase {
    // The setup outcome is deliberately ignored: a failed setup shows up
    // again as a read error below.
    let _ = bootstrap.ensure(pool).await;

    match ProjectRepo::list(pool).await {
        Ok(projects) if !projects.is_empty() => Showcase {
            source: DataSource::Database,
            projects: decorate_all(projects),
        },
        Ok(_) => {
            tracing::warn!("projects table is empty; serving fallback content");
            fallback_showcase()
        }
        Err(err) => {
            tracing::error!(error = %err, "project read failed; serving fallback content");
            fallback_showcase()
        }
    }
}

/// Load a single project by slug. `None` is a normal not-found outcome,
/// never an error.
pub async fn find_by_slug(
    pool: &DbPool,
    bootstrap: &Bootstrap,
    slug: &str,
) -> Option<DecoratedProject> {
    load(pool, bootstrap)
        .await
        .projects
        .into_iter()
        .find(|p| p.slug == slug)
}

fn fallback_showcase() -> Showcase {
    Showcase {
        source: DataSource::Fallback,
        projects: decorate_all(catalog::fallback_projects()),
    }
}
