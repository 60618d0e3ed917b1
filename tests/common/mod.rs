#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use planet_api::routes::app_router;
use planet_api::server::build_state;
use sqlx::PgPool;

pub async fn create_test_planet(pool: &PgPool, name: &str, climate: &str, terrain: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO planets (name, climate, terrain) VALUES ($1, $2, $3) RETURNING id")
        .bind(name)
        .bind(climate)
        .bind(terrain)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_planets(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM planets")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn id_of(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM planets WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Full application router (with middleware) over the test database.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = app_router(build_state(pool));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}
