use mergington::server::{router, startup, state::AppState};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Create a test app backed by a fresh in-memory database with the activity
/// catalog seeded. Returns the router and the database connection for tests
/// that need to inspect or mutate state directly.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory SQLite");

    Migrator::up(&db, None).await.expect("Failed to migrate");

    startup::seed_activities(&db)
        .await
        .expect("Failed to seed activity catalog");

    let app = router::router("static").with_state(AppState::new(db.clone()));

    (app, db)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}
