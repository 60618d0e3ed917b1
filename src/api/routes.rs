//! API route configuration.

use crate::api::handlers::{
    create_planet_handler, delete_planet_handler, get_planet_by_name_handler, get_planet_handler,
    list_planets_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Planet resource routes, mounted under `/planets`.
///
/// # Endpoints
///
/// - `POST   /`             - Create a planet
/// - `GET    /`             - List planets (`?terrain=&climate=`)
/// - `GET    /{id}`         - Fetch a planet by id
/// - `DELETE /{id}`         - Delete a planet
/// - `GET    /name/{name}`  - Fetch a planet by name
pub fn planet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets_handler).post(create_planet_handler))
        .route(
            "/{id}",
            get(get_planet_handler).delete(delete_planet_handler),
        )
        .route("/name/{name}", get(get_planet_by_name_handler))
}
