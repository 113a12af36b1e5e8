use crate::errors::internal::{InternalError, ItemError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemApiError {
    /// Request failed validation
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Item not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemApiError {
    /// Create a BadRequest error
    pub fn bad_request(message: impl Into<String>) -> Self {
        ItemApiError::BadRequest(Json(ErrorResponse {
            error: message.into(),
        }))
    }

    /// Create a BadRequest error for a missing or empty name
    pub fn name_required() -> Self {
        Self::bad_request("Name is required")
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemApiError::NotFound(Json(ErrorResponse {
            error: "Item not found".to_string(),
        }))
    }

    /// Convert InternalError to ItemApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Database error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Item(ItemError::NotFound(_)) => Self::not_found(),
            InternalError::Database(_) => {
                tracing::error!("Storage error in item operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        ItemApiError::InternalError(Json(ErrorResponse {
            error: "An internal error occurred".to_string(),
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemApiError::BadRequest(json) => json.0.error.clone(),
            ItemApiError::NotFound(json) => json.0.error.clone(),
            ItemApiError::InternalError(json) => json.0.error.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemApiError::BadRequest(_) => 400,
            ItemApiError::NotFound(_) => 404,
            ItemApiError::InternalError(_) => 500,
        }
    }
}

impl From<InternalError> for ItemApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
