//! Handlers for the planet resource.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::planet::{CreatePlanetRequest, ListPlanetsQuery, PlanetResponse};
use crate::domain::entities::NewPlanet;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a planet.
///
/// # Endpoint
///
/// `POST /planets`
///
/// # Request Body
///
/// ```json
/// { "name": "Tatooine", "climate": "arid", "terrain": "desert" }
/// ```
///
/// # Errors
///
/// Returns 422 if any field is missing or empty (the service is not called).
/// Returns 409 if a planet with the same name exists.
pub async fn create_planet_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<PlanetResponse>), AppError> {
    let new_planet = NewPlanet::try_from(payload)?;
    let planet = state.planet_service.create(new_planet).await?;

    Ok((StatusCode::CREATED, Json(planet.into())))
}

/// Fetches a planet by id.
///
/// # Endpoint
///
/// `GET /planets/{id}`
///
/// # Errors
///
/// Returns 404 with an empty body if the planet does not exist.
pub async fn get_planet_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PlanetResponse>, AppError> {
    state
        .planet_service
        .get(id)
        .await?
        .map(|planet| Json(planet.into()))
        .ok_or_else(|| AppError::not_found("Planet not found", json!({"id": id})))
}

/// Fetches a planet by exact name.
///
/// # Endpoint
///
/// `GET /planets/name/{name}`
///
/// # Errors
///
/// Returns 404 with an empty body if the planet does not exist.
pub async fn get_planet_by_name_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PlanetResponse>, AppError> {
    state
        .planet_service
        .get_by_name(&name)
        .await?
        .map(|planet| Json(planet.into()))
        .ok_or_else(|| AppError::not_found("Planet not found", json!({"name": name})))
}

/// Lists planets, optionally filtered by exact terrain and climate.
///
/// # Endpoint
///
/// `GET /planets?terrain=desert&climate=arid`
///
/// Always 200; an empty match is an empty array.
pub async fn list_planets_handler(
    Query(query): Query<ListPlanetsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, AppError> {
    let planets = state
        .planet_service
        .list(query.terrain, query.climate)
        .await?;

    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

/// Deletes a planet.
///
/// # Endpoint
///
/// `DELETE /planets/{id}`
///
/// # Errors
///
/// Returns 404 with an empty body if the planet does not exist.
pub async fn delete_planet_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.planet_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::planet_routes;
    use crate::application::services::PlanetService;
    use crate::domain::entities::Planet;
    use crate::domain::repositories::{MockPlanetRepository, PlanetRepository};
    use axum::Router;
    use axum_test::TestServer;
    use std::sync::Arc;

    fn make_server(mock_repo: MockPlanetRepository) -> TestServer {
        let repository: Arc<dyn PlanetRepository> = Arc::new(mock_repo);
        let state = AppState::new(Arc::new(PlanetService::new(repository)));
        let app = Router::new()
            .nest("/planets", planet_routes())
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    fn tatooine() -> Planet {
        Planet::new(1, "Tatooine".into(), "arid".into(), "desert".into())
    }

    fn alderaan() -> Planet {
        Planet::new(
            2,
            "Alderaan".into(),
            "temperate".into(),
            "grasslands, mountains".into(),
        )
    }

    fn yavin() -> Planet {
        Planet::new(
            3,
            "Yavin IV".into(),
            "temperate, tropical".into(),
            "jungle, rainforests".into(),
        )
    }

    // ─── CREATE ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_planet_returns_created() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|p| Ok(p.into_planet(1)));

        let server = make_server(mock_repo);

        let response = server
            .post("/planets")
            .json(&json!({"name": "Tatooine", "climate": "arid", "terrain": "desert"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({
            "id": 1,
            "name": "Tatooine",
            "climate": "arid",
            "terrain": "desert"
        }));
    }

    #[tokio::test]
    async fn test_create_planet_invalid_data_returns_unprocessable() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo.expect_create().never();

        let server = make_server(mock_repo);

        let response = server
            .post("/planets")
            .json(&json!({"name": "", "climate": "", "terrain": ""}))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");

        let response = server.post("/planets").json(&json!({})).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let response = server
            .post("/planets")
            .json(&json!({"name": null, "climate": null, "terrain": null}))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_planet_existing_name_returns_conflict() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Integrity constraint violation",
                json!({"constraint": "planets_name_key"}),
            ))
        });

        let server = make_server(mock_repo);

        let response = server
            .post("/planets")
            .json(&json!({"name": "Tatooine", "climate": "arid", "terrain": "desert"}))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "conflict");
    }

    // ─── GET ─────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_get_planet_by_existing_id() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(tatooine())));

        let server = make_server(mock_repo);

        let response = server.get("/planets/1").await;

        response.assert_status_ok();
        response.assert_json(&PlanetResponse::from(tatooine()));
    }

    #[tokio::test]
    async fn test_get_planet_by_unknown_id_returns_not_found() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let server = make_server(mock_repo);

        let response = server.get("/planets/99").await;

        response.assert_status_not_found();
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_get_planet_by_existing_name() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "Yavin IV")
            .times(1)
            .returning(|_| Ok(Some(yavin())));

        let server = make_server(mock_repo);

        let response = server.get("/planets/name/Yavin%20IV").await;

        response.assert_status_ok();
        response.assert_json(&PlanetResponse::from(yavin()));
    }

    #[tokio::test]
    async fn test_get_planet_by_unknown_name_returns_not_found() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let server = make_server(mock_repo);

        let response = server.get("/planets/name/Hoth").await;

        response.assert_status_not_found();
    }

    // ─── LIST ────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_planets_without_filters() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_find_all()
            .withf(|filter| filter.is_empty())
            .times(1)
            .returning(|_| Ok(vec![tatooine(), alderaan(), yavin()]));

        let server = make_server(mock_repo);

        let response = server.get("/planets").await;

        response.assert_status_ok();
        let body = response.json::<Vec<PlanetResponse>>();
        assert_eq!(body.len(), 3);
    }

    #[tokio::test]
    async fn test_list_planets_with_filters() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_find_all()
            .withf(|filter| filter.predicates().len() == 2)
            .times(1)
            .returning(|_| Ok(vec![tatooine()]));

        let server = make_server(mock_repo);

        let response = server
            .get("/planets")
            .add_query_param("terrain", "desert")
            .add_query_param("climate", "arid")
            .await;

        response.assert_status_ok();
        response.assert_json(&vec![PlanetResponse::from(tatooine())]);
    }

    #[tokio::test]
    async fn test_list_planets_empty() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|_| Ok(vec![]));

        let server = make_server(mock_repo);

        let response = server.get("/planets").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    // ─── DELETE ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_delete_planet_returns_no_content() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let server = make_server(mock_repo);

        let response = server.delete("/planets/1").await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_planet_returns_not_found() {
        let mut mock_repo = MockPlanetRepository::new();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|id| Err(AppError::not_found("Planet not found", json!({"id": id}))));

        let server = make_server(mock_repo);

        let response = server.delete("/planets/1").await;

        response.assert_status_not_found();
        assert!(response.text().is_empty());
    }
}
