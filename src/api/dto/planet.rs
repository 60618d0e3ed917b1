//! DTOs for the planet endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewPlanet, Planet};
use crate::error::AppError;

/// Request body for `POST /planets`.
///
/// Fields are optional at the serde level so that missing and `null` values
/// reach validation and are reported as 422 like empty strings are.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreatePlanetRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "climate is required"),
        length(min = 1, message = "climate must not be empty")
    )]
    pub climate: Option<String>,

    #[validate(
        required(message = "terrain is required"),
        length(min = 1, message = "terrain must not be empty")
    )]
    pub terrain: Option<String>,
}

impl TryFrom<CreatePlanetRequest> for NewPlanet {
    type Error = AppError;

    fn try_from(request: CreatePlanetRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        match (request.name, request.climate, request.terrain) {
            (Some(name), Some(climate), Some(terrain)) => {
                Ok(NewPlanet::new(name, climate, terrain))
            }
            _ => Err(AppError::validation(
                "Validation failed",
                serde_json::json!({}),
            )),
        }
    }
}

/// Planet representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetResponse {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
        }
    }
}

/// Query string for `GET /planets`. Absent parameters disable that filter.
#[derive(Debug, Default, Deserialize)]
pub struct ListPlanetsQuery {
    pub terrain: Option<String>,
    pub climate: Option<String>,
}
