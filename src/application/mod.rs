//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::planet_service::PlanetService`] - Planet creation, lookup, listing and removal

pub mod services;
