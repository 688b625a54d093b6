//! Repository for the `projects` table.

use folio_core::catalog::SeedProject;
use folio_core::project::Project;
use sqlx::PgPool;

use crate::models::project::ProjectRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, description, tech_stack";

/// Provides schema setup and read operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Create the `projects` table if it does not exist. Idempotent.
    pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS projects (
                id BIGSERIAL PRIMARY KEY,
                slug VARCHAR(120) UNIQUE NOT NULL,
                name VARCHAR(200) NOT NULL,
                description TEXT NOT NULL,
                tech_stack TEXT[] NOT NULL DEFAULT '{}'
            )",
        )
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Insert a seed record, or refresh `name`, `description`, and
    /// `tech_stack` when a row with the same slug already exists.
    ///
    /// The id is assigned by the store on insert and never touched on
    /// update.
    pub async fn upsert_seed(pool: &PgPool, seed: &SeedProject) -> Result<(), sqlx::Error> {
        let tech_stack: Vec<String> = seed.tech_stack.iter().map(|s| s.to_string()).collect();
        sqlx::query(
            "INSERT INTO projects (slug, name, description, tech_stack)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (slug) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                tech_stack = EXCLUDED.tech_stack",
        )
        .bind(seed.slug)
        .bind(seed.name)
        .bind(seed.description)
        .bind(&tech_stack)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List all projects ordered by ascending id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id ASC");
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }
}
