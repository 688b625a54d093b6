//! Compiled-in project catalog.
//!
//! The site owner curates this file by hand: the seed records are pushed
//! into the database on first use, the fallback records are served whenever
//! the database is unreachable or empty, and the two lookup tables supply
//! the presentation-only fields attached during decoration.

use crate::project::Project;

/// A canonical project record used to initialize or reconcile the store.
///
/// Seeds never carry an `id`; the store assigns one on insert and keeps it
/// across re-seeds. `slug` is the natural key for reconciliation.
#[derive(Debug, Clone, Copy)]
pub struct SeedProject {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
}

/// Seed set pushed into the `projects` table, keyed on `slug`.
pub const SEED_PROJECTS: &[SeedProject] = &[
    SeedProject {
        slug: "qibla-compass-app",
        name: "Qibla Direction Recommender App",
        description: "Built a Flutter app that recommends Qibla direction and stores app data \
                      in Firebase. The related journal was published in SINTA 3.",
        tech_stack: &["Flutter", "Dart", "Firebase"],
    },
    SeedProject {
        slug: "flight-booking-app",
        name: "Flight Booking App",
        description: "Developed a full stack mobile app for airplane ticket and seat booking \
                      with Firebase integration.",
        tech_stack: &["Flutter", "Dart", "Firebase"],
    },
];

/// Static project list served when the database is unreachable or empty.
///
/// Mirrors the seed set with fixed ids so pages render identically whether
/// or not the store is available.
pub fn fallback_projects() -> Vec<Project> {
    SEED_PROJECTS
        .iter()
        .enumerate()
        .map(|(i, seed)| Project {
            id: i as i64 + 1,
            slug: seed.slug.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            tech_stack: seed.tech_stack.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

/// External detail page for a project, if one exists.
///
/// Projects without an entry link to the internal `/projects/{slug}` page.
pub fn detail_link(slug: &str) -> Option<&'static str> {
    match slug {
        "flight-booking-app" => Some("https://github.com/GirindraSW/AirPlaneCourseREH"),
        "qibla-compass-app" => Some("https://github.com/GirindraSW/RSD_Qibla"),
        _ => None,
    }
}

/// Card image for a project, if one exists.
pub fn image_url(slug: &str) -> Option<&'static str> {
    match slug {
        "flight-booking-app" => Some("/img/airplane.png"),
        "qibla-compass-app" => Some("/img/qibla.png"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_slugs_are_unique() {
        let mut slugs: Vec<_> = SEED_PROJECTS.iter().map(|s| s.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SEED_PROJECTS.len());
    }

    #[test]
    fn fallback_ids_ascend_from_one() {
        let fallback = fallback_projects();
        assert!(!fallback.is_empty());
        for (i, project) in fallback.iter().enumerate() {
            assert_eq!(project.id, i as i64 + 1);
        }
    }

    #[test]
    fn every_seed_has_a_fallback_counterpart() {
        let fallback = fallback_projects();
        for seed in SEED_PROJECTS {
            assert!(fallback.iter().any(|p| p.slug == seed.slug));
        }
    }
}
