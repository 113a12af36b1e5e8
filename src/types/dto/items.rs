use chrono::{DateTime, SecondsFormat};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::item;

/// Request body for creating or updating an item
///
/// Both fields are optional at the schema level so that a missing name
/// reaches the handler and is reported with the standard error envelope.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Name of the item, required and non-empty
    pub name: Option<String>,

    /// Optional description; missing or null is stored as an empty string
    pub description: Option<String>,
}

impl ItemRequest {
    /// The name if present and non-empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier assigned by the store
    pub id: i64,

    /// Name of the item
    pub name: String,

    /// Description of the item, empty when none was given
    pub description: String,

    /// Timestamp when the item was created (RFC 3339)
    pub created_at: String,

    /// Timestamp of the last successful update (RFC 3339)
    pub updated_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

fn format_timestamp(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| seconds.to_string())
}

/// Envelope carrying a single item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemEnvelope {
    pub message: String,
    pub data: Item,
}

/// Envelope carrying every stored item, newest first
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemListEnvelope {
    pub message: String,
    pub data: Vec<Item>,
}

/// Confirmation that an item was removed
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteItemEnvelope {
    pub message: String,

    /// Identifier of the deleted item
    pub id: i64,
}

#[derive(ApiResponse)]
pub enum CreateItemApiResponse {
    /// Item stored, body carries the new row
    #[oai(status = 201)]
    Created(Json<ItemEnvelope>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rejects_missing_and_empty() {
        let missing = ItemRequest::default();
        assert_eq!(missing.name(), None);

        let empty = ItemRequest {
            name: Some(String::new()),
            description: None,
        };
        assert_eq!(empty.name(), None);
    }

    #[test]
    fn test_whitespace_name_passes_presence_check() {
        let request = ItemRequest {
            name: Some("  ".to_string()),
            description: None,
        };
        assert_eq!(request.name(), Some("  "));
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let request = ItemRequest {
            name: Some("Milk".to_string()),
            description: None,
        };
        assert_eq!(request.description(), "");
    }

    #[test]
    fn test_item_from_model_formats_timestamps() {
        let model = item::Model {
            id: 7,
            name: "Milk".to_string(),
            description: "2%".to_string(),
            created_at: 0,
            updated_at: 86_400,
        };

        let item = Item::from(model);

        assert_eq!(item.id, 7);
        assert_eq!(item.created_at, "1970-01-01T00:00:00Z");
        assert_eq!(item.updated_at, "1970-01-02T00:00:00Z");
    }
}
