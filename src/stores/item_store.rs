use std::sync::Arc;

use crate::errors::InternalError;
use crate::providers::ClockProvider;
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

/// ItemStore owns the `items` table: identity assignment, timestamps and
/// ordered retrieval
///
/// Every method is a single statement, so each operation is atomic on its
/// own and no transactions are opened. A store built with `unavailable`
/// has no connection and fails every call with a database error.
pub struct ItemStore {
    db: Option<DatabaseConnection>,
    clock: Arc<dyn ClockProvider + Send + Sync>,
}

impl ItemStore {
    /// Create a new ItemStore
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `clock` - Source of creation and update timestamps
    pub fn new(db: DatabaseConnection, clock: Arc<dyn ClockProvider + Send + Sync>) -> Self {
        Self {
            db: Some(db),
            clock,
        }
    }

    /// Create an ItemStore with no database behind it
    pub fn unavailable(clock: Arc<dyn ClockProvider + Send + Sync>) -> Self {
        Self { db: None, clock }
    }

    fn conn(&self, operation: &str) -> Result<&DatabaseConnection, InternalError> {
        self.db
            .as_ref()
            .ok_or_else(|| InternalError::unavailable(operation))
    }

    /// List every item, newest first
    ///
    /// Items created in the same second are returned in reverse insertion
    /// order (higher id first).
    pub async fn list_all(&self) -> Result<Vec<item::Model>, InternalError> {
        let db = self.conn("list_items")?;

        Item::find()
            .order_by_desc(item::Column::CreatedAt)
            .order_by_desc(item::Column::Id)
            .all(db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Get a single item
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - The item
    /// * `Ok(None)` - No item with this id
    /// * `Err(InternalError)` - Database error
    pub async fn get_by_id(&self, id: i64) -> Result<Option<item::Model>, InternalError> {
        let db = self.conn("get_item")?;

        Item::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| InternalError::database("get_item", e))
    }

    /// Insert a new item and return its assigned id
    ///
    /// Both timestamps are set to the same instant. The caller is
    /// responsible for rejecting empty names.
    pub async fn insert(&self, name: &str, description: &str) -> Result<i64, InternalError> {
        let db = self.conn("insert_item")?;
        let now = self.clock.now_timestamp();

        let new_item = ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = Item::insert(new_item)
            .exec(db)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        tracing::debug!("Inserted item {}", result.last_insert_id);

        Ok(result.last_insert_id)
    }

    /// Overwrite name and description and refresh `updated_at`
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    ///
    /// # Returns
    /// * `Ok(1)` - Item updated
    /// * `Ok(0)` - No item with this id
    /// * `Err(InternalError)` - Database error
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<u64, InternalError> {
        let db = self.conn("update_item")?;
        let now = self.clock.now_timestamp();

        let result = Item::update_many()
            .col_expr(item::Column::Name, Expr::value(name))
            .col_expr(item::Column::Description, Expr::value(description))
            .col_expr(
                item::Column::UpdatedAt,
                Expr::cust_with_values("MAX(updated_at, ?)", [now]),
            )
            .filter(item::Column::Id.eq(id))
            .exec(db)
            .await
            .map_err(|e| InternalError::database("update_item", e))?;

        Ok(result.rows_affected)
    }

    /// Hard-delete an item
    ///
    /// # Returns
    /// * `Ok(1)` - Item removed
    /// * `Ok(0)` - No item with this id
    /// * `Err(InternalError)` - Database error
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, InternalError> {
        let db = self.conn("delete_item")?;

        let result = Item::delete_by_id(id)
            .exec(db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        Ok(result.rows_affected)
    }

    /// Number of stored items
    pub async fn count(&self) -> Result<u64, InternalError> {
        let db = self.conn("count_items")?;

        Item::find()
            .count(db)
            .await
            .map_err(|e| InternalError::database("count_items", e))
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &self.db.as_ref().map(|_| "<connection>"))
            .field("clock", &"<clock>")
            .finish()
    }
}
