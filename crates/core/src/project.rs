//! Project entity and its decorated view model.

use serde::Serialize;

use crate::catalog;
use crate::types::DbId;

/// A project as stored in the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
}

/// A project enriched with presentation-only fields for template rendering.
///
/// Built fresh per request by [`Project::decorate`] and discarded after the
/// page is rendered; never persisted. Field names serialize in camelCase to
/// match the template context keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedProject {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    /// Card image, absent when no image is mapped for the slug.
    pub image_url: Option<String>,
    /// External link when mapped, internal `/projects/{slug}` otherwise.
    pub detail_url: String,
    pub detail_target: &'static str,
    pub detail_rel: &'static str,
}

impl Project {
    /// Attach presentation fields from the static lookup tables.
    ///
    /// Total for any slug, mapped or not.
    pub fn decorate(self) -> DecoratedProject {
        let external = catalog::detail_link(&self.slug);
        let detail_url = external
            .map(str::to_string)
            .unwrap_or_else(|| format!("/projects/{}", self.slug));

        DecoratedProject {
            image_url: catalog::image_url(&self.slug).map(str::to_string),
            detail_url,
            detail_target: if external.is_some() { "_blank" } else { "_self" },
            detail_rel: if external.is_some() {
                "noopener noreferrer"
            } else {
                ""
            },
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            tech_stack: self.tech_stack,
        }
    }
}

/// Decorate a list of projects, preserving order.
pub fn decorate_all(projects: Vec<Project>) -> Vec<DecoratedProject> {
    projects.into_iter().map(Project::decorate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str) -> Project {
        Project {
            id: 7,
            slug: slug.to_string(),
            name: "Some Project".to_string(),
            description: "Does things.".to_string(),
            tech_stack: vec!["Flutter".to_string()],
        }
    }

    #[test]
    fn mapped_slug_gets_external_link() {
        let decorated = project("flight-booking-app").decorate();

        assert_eq!(
            decorated.detail_url,
            "https://github.com/GirindraSW/AirPlaneCourseREH"
        );
        assert_eq!(decorated.detail_target, "_blank");
        assert_eq!(decorated.detail_rel, "noopener noreferrer");
        assert_eq!(decorated.image_url.as_deref(), Some("/img/airplane.png"));
    }

    #[test]
    fn unmapped_slug_falls_back_to_internal_page() {
        let decorated = project("unknown-x").decorate();

        assert_eq!(decorated.detail_url, "/projects/unknown-x");
        assert_eq!(decorated.detail_target, "_self");
        assert_eq!(decorated.detail_rel, "");
        assert_eq!(decorated.image_url, None);
    }

    #[test]
    fn decoration_preserves_entity_fields() {
        let decorated = project("unknown-x").decorate();

        assert_eq!(decorated.id, 7);
        assert_eq!(decorated.name, "Some Project");
        assert_eq!(decorated.tech_stack, vec!["Flutter".to_string()]);
    }

    #[test]
    fn decorate_all_preserves_order() {
        let decorated = decorate_all(vec![project("a"), project("b"), project("c")]);
        let slugs: Vec<_> = decorated.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b", "c"]);
    }
}
