use thiserror::Error;

/// Item domain errors
#[derive(Error, Debug)]
pub enum ItemError {
    /// No row with the given id
    #[error("Item not found: {0}")]
    NotFound(i64),
}
