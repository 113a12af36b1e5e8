// Common test utilities for integration tests

use items_backend::api::build_app;
use items_backend::config::{connect_database, migrate_database};
use items_backend::providers::SystemClock;
use items_backend::stores::ItemStore;
use poem::test::TestClient;
use poem::Endpoint;
use std::sync::Arc;

/// Creates an ItemStore over a migrated in-memory database
pub async fn setup_test_item_store() -> Arc<ItemStore> {
    let db = connect_database("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    Arc::new(ItemStore::new(db, Arc::new(SystemClock)))
}

/// Creates a client for the full application over a fresh database
pub async fn setup_test_client() -> TestClient<impl Endpoint> {
    let item_store = setup_test_item_store().await;
    TestClient::new(build_app(item_store, "http://localhost:5000".to_string()))
}

/// Creates a client whose store has no database behind it
pub fn setup_unavailable_client() -> TestClient<impl Endpoint> {
    let item_store = Arc::new(ItemStore::unavailable(Arc::new(SystemClock)));
    TestClient::new(build_app(item_store, "http://localhost:5000".to_string()))
}
