//! One-time schema and seed setup.

use tokio::sync::OnceCell;

use folio_core::catalog;

use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Terminal outcome of the one-time setup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Schema exists and the seed set has been reconciled.
    Ready,
    /// Setup failed; reads serve fallback content until the process
    /// restarts.
    Unavailable,
}

/// Process-lifetime guard around schema creation and seeding.
///
/// The first caller of [`Bootstrap::ensure`] runs the setup, concurrent
/// callers await the same in-flight pass, and every later caller observes
/// the cached outcome. A failed pass is cached too: there is no in-process
/// retry.
#[derive(Debug, Default)]
pub struct Bootstrap {
    state: OnceCell<SetupOutcome>,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the store is set up, running the work at most once.
    ///
    /// Never fails: a setup error is logged and reported as
    /// [`SetupOutcome::Unavailable`].
    pub async fn ensure(&self, pool: &DbPool) -> SetupOutcome {
        *self
            .state
            .get_or_init(|| async {
                match run_setup(pool).await {
                    Ok(()) => SetupOutcome::Ready,
                    Err(err) => {
                        tracing::error!(
                            error = %err,
                            "database setup failed; pages will serve fallback content"
                        );
                        SetupOutcome::Unavailable
                    }
                }
            })
            .await
    }
}

/// Create the schema and reconcile the seed set, one upsert per record.
async fn run_setup(pool: &DbPool) -> Result<(), sqlx::Error> {
    ProjectRepo::ensure_schema(pool).await?;

    for seed in catalog::SEED_PROJECTS {
        ProjectRepo::upsert_seed(pool, seed).await?;
    }

    tracing::info!(seeds = catalog::SEED_PROJECTS.len(), "projects table ready");
    Ok(())
}
