//! Repository trait for planet storage.

use crate::domain::entities::{NewPlanet, Planet};
use crate::domain::query_builder::PlanetFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for planets.
///
/// The store owns identity assignment and the integrity rules: names are
/// unique and no text column may be empty.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPlanetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_planet.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Inserts a planet and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is taken or a column
    /// constraint rejects the row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError>;

    /// Finds a planet by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError>;

    /// Finds a planet by its exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, AppError>;

    /// Returns every planet matching all predicates of `filter`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self, filter: &PlanetFilter) -> Result<Vec<Planet>, AppError>;

    /// Deletes a planet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no planet has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Round-trips a trivial query to check store connectivity.
    async fn ping(&self) -> Result<(), AppError>;
}
