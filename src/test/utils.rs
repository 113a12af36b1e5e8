// Test utilities shared across unit tests
// Only compiled when running tests

use sea_orm::{Database, DatabaseConnection};
use migration::{ItemsMigrator, MigratorTrait};
use crate::providers::ManualClock;
use crate::stores::ItemStore;
use std::sync::Arc;

/// Timestamp the manual clock starts at in store tests (2025-01-01T00:00:00Z)
pub const TEST_EPOCH: i64 = 1_735_689_600;

/// Creates an in-memory database with the items table created
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemsMigrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a migrated database and an ItemStore driven by a manual clock
///
/// Callers can discard what they don't need:
/// ```rust
/// let (_db, clock, item_store) = setup_test_item_store().await;
/// ```
pub async fn setup_test_item_store() -> (DatabaseConnection, Arc<ManualClock>, Arc<ItemStore>) {
    let db = setup_test_db().await;
    let clock = Arc::new(ManualClock::at(TEST_EPOCH));
    let item_store = Arc::new(ItemStore::new(db.clone(), clock.clone()));

    (db, clock, item_store)
}

/// Creates an ItemStore with no database connection
///
/// Every store call fails with a database error, like a server whose
/// startup connection failed.
pub fn setup_unavailable_item_store() -> Arc<ItemStore> {
    Arc::new(ItemStore::unavailable(Arc::new(ManualClock::at(TEST_EPOCH))))
}
