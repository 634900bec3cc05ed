//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Re-validates input so callers outside the HTTP layer get the same
/// rules, and turns a missing row into [`ItemError::NotFound`].
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: ItemInput) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.get_all().await
    }

    /// Overwrite an item. Updating a missing id succeeds without effect.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i32, input: ItemInput) -> ItemResult<()> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let rows_affected = self.repository.update(id, input).await?;
        if rows_affected == 0 {
            tracing::warn!(item_id = id, "Update matched no item");
        }
        Ok(())
    }

    /// Delete an item. Deleting a missing id succeeds without effect.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> ItemResult<()> {
        let rows_affected = self.repository.delete(id).await?;
        if rows_affected == 0 {
            tracing::warn!(item_id = id, "Delete matched no item");
        }
        Ok(())
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
