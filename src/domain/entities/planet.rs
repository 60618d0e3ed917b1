//! Domain entity representing a catalogued planet.

use validator::Validate;

/// A persisted planet.
///
/// The `id` is assigned by the store on insertion and never changes. There is
/// no update operation; a planet is either present or deleted.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

impl Planet {
    pub fn new(id: i64, name: String, climate: String, terrain: String) -> Self {
        Self {
            id,
            name,
            climate,
            terrain,
        }
    }
}

/// Input data for creating a new planet.
///
/// All three fields must be non-empty. Name uniqueness is enforced by the
/// store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewPlanet {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "climate must not be empty"))]
    pub climate: String,
    #[validate(length(min = 1, message = "terrain must not be empty"))]
    pub terrain: String,
}

impl NewPlanet {
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }

    /// Attaches the store-assigned identifier.
    pub fn into_planet(self, id: i64) -> Planet {
        Planet::new(id, self.name, self.climate, self.terrain)
    }
}
