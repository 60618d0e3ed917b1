//! Planet catalogue service.

use crate::domain::entities::{NewPlanet, Planet};
use crate::domain::query_builder::{PlanetTemplate, make_query};
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;
use std::sync::Arc;
use validator::Validate;

/// Service orchestrating planet persistence.
///
/// A thin pass-through over the repository: store failures on create and
/// remove propagate unchanged, while lookups report absence as `None` or an
/// empty list rather than as an error.
pub struct PlanetService<R: PlanetRepository + ?Sized = dyn PlanetRepository> {
    repository: Arc<R>,
}

impl<R: PlanetRepository + ?Sized> PlanetService<R> {
    /// Creates a new planet service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a new planet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is empty. The store is
    /// not called in that case.
    /// Returns [`AppError::Conflict`] if the name already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        new_planet.validate()?;

        let planet = self.repository.create(new_planet).await?;
        tracing::info!(id = planet.id, name = %planet.name, "Planet created");

        Ok(planet)
    }

    /// Looks up a planet by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Option<Planet>, AppError> {
        tracing::debug!(id, "Fetching planet by id");
        self.repository.find_by_id(id).await
    }

    /// Looks up a planet by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Planet>, AppError> {
        tracing::debug!(name, "Fetching planet by name");
        self.repository.find_by_name(name).await
    }

    /// Lists planets, optionally filtered by exact terrain and/or climate.
    ///
    /// `None` or an empty string disables the filter for that field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(
        &self,
        terrain: Option<String>,
        climate: Option<String>,
    ) -> Result<Vec<Planet>, AppError> {
        let filter = make_query(&PlanetTemplate::new(terrain, climate));
        let planets = self.repository.find_all(&filter).await?;

        tracing::debug!(
            predicates = filter.predicates().len(),
            found = planets.len(),
            "Listed planets"
        );

        Ok(planets)
    }

    /// Deletes a planet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no planet has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "Planet removed");
        Ok(())
    }

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the store does not answer.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
