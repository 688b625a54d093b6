//! Portfolio web server library.
//!
//! Exposes the building blocks (config, state, error handling, templates,
//! routes) so integration tests and the binary entrypoint build the exact
//! same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod site;
pub mod state;
pub mod templates;
