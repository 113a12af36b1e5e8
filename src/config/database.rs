use sea_orm::{Database, DatabaseConnection};
use migration::{ItemsMigrator, MigratorTrait};
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Connect to the database
///
/// Does NOT create tables - call `migrate_database()` separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn connect_database(database_url: &str) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", database_url);

    Ok(db)
}

/// Create the items table if it does not exist yet
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    ItemsMigrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Items table ready");

    Ok(())
}

/// Close the connection pool
pub async fn close_database(db: DatabaseConnection) -> Result<(), InternalError> {
    db.close()
        .await
        .map_err(|source| DatabaseError::Close { source })?;

    Ok(())
}
