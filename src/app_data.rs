use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::config::{close_database, connect_database, migrate_database, BootstrapSettings};
use crate::errors::InternalError;
use crate::providers::{ClockProvider, SystemClock};
use crate::stores::ItemStore;

/// Application data owned by main
///
/// Created once at startup and handed to the API layer; `shutdown` releases
/// the database connection when the server stops.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ├─ db (Option<DatabaseConnection>, None if startup failed)
///   └─ item_store (Arc<ItemStore>)
///   ↓
/// ItemsApi::new(item_store)
///   ↓ server stops
/// AppData::shutdown()
/// ```
pub struct AppData {
    pub db: Option<DatabaseConnection>,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Connect, create the items table and build the stores
    ///
    /// A failed connection or table bootstrap is logged and the server keeps
    /// running without a working store: every item request then fails with
    /// a storage error while the health endpoint stays up.
    pub async fn init(settings: &BootstrapSettings) -> Self {
        tracing::info!("Initializing AppData...");

        let db = match connect_database(settings.database_url()).await {
            Ok(db) => {
                if let Err(e) = migrate_database(&db).await {
                    tracing::error!("Failed to create items table: {}", e);
                }
                Some(db)
            }
            Err(e) => {
                tracing::error!("Error opening database: {}", e);
                None
            }
        };

        let clock: Arc<dyn ClockProvider + Send + Sync> = Arc::new(SystemClock);
        let item_store = Arc::new(match &db {
            Some(db) => ItemStore::new(db.clone(), clock),
            None => ItemStore::unavailable(clock),
        });

        match item_store.count().await {
            Ok(count) => tracing::info!("Items table ready ({} items)", count),
            Err(e) => tracing::warn!("Item store unavailable: {}", e),
        }

        Self { db, item_store }
    }

    /// Close the database connection, if one was opened
    pub async fn shutdown(self) -> Result<(), InternalError> {
        if let Some(db) = self.db {
            close_database(db).await?;
            tracing::info!("Database connection closed");
        }
        Ok(())
    }
}
