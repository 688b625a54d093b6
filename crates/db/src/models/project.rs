//! Row mapping for the `projects` table.

use folio_core::project::Project;
use folio_core::types::DbId;
use sqlx::FromRow;

/// A raw `projects` row as returned by the driver.
///
/// `tech_stack` is decoded as nullable although the column is NOT NULL with
/// a default: the conversion coerces a missing array to an empty list
/// instead of trusting the store's shape.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub tech_stack: Option<Vec<String>>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            slug: row.slug,
            name: row.name,
            description: row.description,
            tech_stack: row.tech_stack.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tech_stack_becomes_empty() {
        let row = ProjectRow {
            id: 1,
            slug: "a".to_string(),
            name: "A".to_string(),
            description: "d".to_string(),
            tech_stack: None,
        };

        let project = Project::from(row);
        assert!(project.tech_stack.is_empty());
    }
}
