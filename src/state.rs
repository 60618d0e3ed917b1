//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::PlanetService;

#[derive(Clone)]
pub struct AppState {
    pub planet_service: Arc<PlanetService>,
}

impl AppState {
    pub fn new(planet_service: Arc<PlanetService>) -> Self {
        Self { planet_service }
    }
}
