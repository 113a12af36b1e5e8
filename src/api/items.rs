use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::errors::ItemApiError;
use crate::errors::internal::{InternalError, ItemError};
use crate::stores::ItemStore;
use crate::types::dto::items::{
    CreateItemApiResponse, DeleteItemEnvelope, Item, ItemEnvelope, ItemListEnvelope,
    ItemRequest,
};
use std::sync::Arc;

/// Item CRUD endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given ItemStore
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }

    /// Re-read a row after a write so the response carries stored values
    async fn load(&self, id: i64) -> Result<Item, InternalError> {
        self.item_store
            .get_by_id(id)
            .await?
            .map(Item::from)
            .ok_or_else(|| ItemError::NotFound(id).into())
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List all items
    ///
    /// Returns every item, newest first
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Result<Json<ItemListEnvelope>, ItemApiError> {
        let items = self.item_store.list_all().await?;

        Ok(Json(ItemListEnvelope {
            message: "success".to_string(),
            data: items.into_iter().map(Item::from).collect(),
        }))
    }

    /// Get a single item
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<i64>) -> Result<Json<ItemEnvelope>, ItemApiError> {
        let item = self
            .item_store
            .get_by_id(id.0)
            .await?
            .ok_or_else(ItemApiError::not_found)?;

        Ok(Json(ItemEnvelope {
            message: "success".to_string(),
            data: item.into(),
        }))
    }

    /// Create a new item
    ///
    /// The store assigns the id and both timestamps
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<ItemRequest>,
    ) -> Result<CreateItemApiResponse, ItemApiError> {
        let name = body.name().ok_or_else(ItemApiError::name_required)?;

        let id = self.item_store.insert(name, body.description()).await?;
        let item = self.load(id).await?;

        tracing::info!("Created item {}", id);

        Ok(CreateItemApiResponse::Created(Json(ItemEnvelope {
            message: "Item created successfully".to_string(),
            data: item,
        })))
    }

    /// Update an item
    ///
    /// Replaces name and description; a missing description clears it
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<i64>,
        body: Json<ItemRequest>,
    ) -> Result<Json<ItemEnvelope>, ItemApiError> {
        let name = body.name().ok_or_else(ItemApiError::name_required)?;

        let affected = self.item_store.update(id.0, name, body.description()).await?;
        if affected == 0 {
            return Err(ItemApiError::not_found());
        }

        let item = self.load(id.0).await?;

        tracing::info!("Updated item {}", id.0);

        Ok(Json(ItemEnvelope {
            message: "Item updated successfully".to_string(),
            data: item,
        }))
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<i64>) -> Result<Json<DeleteItemEnvelope>, ItemApiError> {
        let affected = self.item_store.delete_by_id(id.0).await?;
        if affected == 0 {
            return Err(ItemApiError::not_found());
        }

        tracing::info!("Deleted item {}", id.0);

        Ok(Json(DeleteItemEnvelope {
            message: "Item deleted successfully".to_string(),
            id: id.0,
        }))
    }
}
