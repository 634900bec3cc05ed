use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput};

/// Repository trait for Item persistence
///
/// No validation happens here. `update` and `delete` report the number of
/// rows they touched; zero is not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a row and return it with its assigned id
    async fn create(&self, input: ItemInput) -> ItemResult<Item>;

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Every row, ordered by id ascending
    async fn get_all(&self) -> ItemResult<Vec<Item>>;

    /// Overwrite every field of the matching row
    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<u64>;

    async fn delete(&self, id: i32) -> ItemResult<u64>;
}

#[derive(Default)]
struct Store {
    rows: BTreeMap<i32, Item>,
    last_id: i32,
}

/// In-memory repository for development and tests
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ItemError::Storage("item id sequence exhausted".to_string()))?;
        store.last_id = id;

        let item = Item::from_input(id, input);
        store.rows.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<u64> {
        let mut store = self.store.write().await;

        match store.rows.get_mut(&id) {
            Some(row) => {
                *row = Item::from_input(id, input);
                tracing::info!(item_id = id, "Updated item");
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> ItemResult<u64> {
        let mut store = self.store.write().await;

        match store.rows.remove(&id) {
            Some(_) => {
                tracing::info!(item_id = id, "Deleted item");
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, stock: i32) -> ItemInput {
        ItemInput {
            name: name.to_string(),
            unit: "pcs".to_string(),
            stock,
            unit_price: 1.5,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryItemRepository::new();

        let first = repo.create(input("Pen", 10)).await.unwrap();
        let second = repo.create(input("Pencil", 5)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.get_by_id(1).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryItemRepository::new();

        let first = repo.create(input("Pen", 10)).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(input("Pencil", 5)).await.unwrap();

        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_get_all_in_id_order() {
        let repo = InMemoryItemRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(input(name, 1)).await.unwrap();
        }

        let names: Vec<_> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(input("Pen", 10)).await.unwrap();

        let replacement = ItemInput {
            name: "Marker".to_string(),
            unit: "box".to_string(),
            stock: 0,
            unit_price: 0.0,
        };
        assert_eq!(repo.update(item.id, replacement).await.unwrap(), 1);

        let stored = repo.get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Marker");
        assert_eq!(stored.unit, "box");
        assert_eq!(stored.stock, 0);
        assert_eq!(stored.unit_price, 0.0);
    }

    #[tokio::test]
    async fn test_create_fails_once_ids_are_exhausted() {
        let repo = InMemoryItemRepository::new();
        repo.store.write().await.last_id = i32::MAX - 1;

        let last = repo.create(input("Pen", 1)).await.unwrap();
        assert_eq!(last.id, i32::MAX);

        let err = repo.create(input("Pencil", 1)).await.unwrap_err();
        assert!(matches!(err, ItemError::Storage(_)));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_rows_affect_nothing() {
        let repo = InMemoryItemRepository::new();

        assert_eq!(repo.update(42, input("Pen", 1)).await.unwrap(), 0);
        assert_eq!(repo.delete(42).await.unwrap(), 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
