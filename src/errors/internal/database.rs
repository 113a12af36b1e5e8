use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Database error: {operation} failed: no database connection")]
    Unavailable { operation: String },

    #[error("Closing database connection failed: {source}")]
    Close {
        #[source]
        source: sea_orm::DbErr,
    },
}
