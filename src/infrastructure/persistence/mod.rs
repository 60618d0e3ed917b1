//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgPlanetRepository`] - Planet storage, lookup and filtered listing

pub mod pg_planet_repository;

pub use pg_planet_repository::PgPlanetRepository;
