use thiserror::Error;

pub mod database;
pub mod item;

pub use database::DatabaseError;
pub use item::ItemError;

/// Internal error type for store operations
///
/// Separates infrastructure errors (database) from item domain errors.
/// Not exposed via API - endpoints must convert to ItemApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn unavailable(operation: &str) -> InternalError {
        InternalError::Database(DatabaseError::Unavailable {
            operation: operation.to_string(),
        })
    }
}
