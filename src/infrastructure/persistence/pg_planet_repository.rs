//! PostgreSQL implementation of planet repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{NewPlanet, Planet};
use crate::domain::query_builder::PlanetFilter;
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;

const SELECT_PLANET: &str = "SELECT id, name, climate, terrain FROM planets";

/// PostgreSQL repository for planets.
///
/// Name uniqueness and non-empty columns are enforced by table constraints
/// (see `migrations/`), so concurrent inserts of the same name are settled by
/// the database.
pub struct PgPlanetRepository {
    pool: Arc<PgPool>,
}

impl PgPlanetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Renders a filter as a parameterised `SELECT`.
///
/// Column names come from [`crate::domain::query_builder::PlanetField`] only;
/// every value is bound.
fn build_select(filter: &PlanetFilter) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new(SELECT_PLANET);

    for (i, predicate) in filter.predicates().iter().enumerate() {
        query.push(if i == 0 { " WHERE " } else { " AND " });
        query.push(predicate.field.column());
        query.push(" = ");
        query.push_bind(predicate.value.as_str());
    }

    query.push(" ORDER BY id");
    query
}

#[async_trait]
impl PlanetRepository for PgPlanetRepository {
    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        let planet = sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, climate, terrain)
            VALUES ($1, $2, $3)
            RETURNING id, name, climate, terrain
            "#,
        )
        .bind(new_planet.name)
        .bind(new_planet.climate)
        .bind(new_planet.terrain)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(planet)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError> {
        let planet = sqlx::query_as::<_, Planet>(&format!("{SELECT_PLANET} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(planet)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, AppError> {
        let planet = sqlx::query_as::<_, Planet>(&format!("{SELECT_PLANET} WHERE name = $1"))
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(planet)
    }

    async fn find_all(&self, filter: &PlanetFilter) -> Result<Vec<Planet>, AppError> {
        let planets = build_select(filter)
            .build_query_as::<Planet>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(planets)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Planet not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
