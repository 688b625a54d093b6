//! Domain types and compiled-in content for the portfolio site.
//!
//! This crate has no I/O: it defines the [`project::Project`] entity shape,
//! the derived [`project::DecoratedProject`] view model, and the static
//! catalog (seed records, fallback records, link and image lookups) that the
//! persistence and web layers consume.

pub mod catalog;
pub mod project;
pub mod types;
