use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    repository::{Lookup, RepositoryError, TodoItemsRepository},
    todo::{NewTodoItem, TodoItem, TodoItemId},
};

#[derive(Default)]
struct Store {
    items: BTreeMap<TodoItemId, TodoItem>,
    last_id: TodoItemId,
}

/// Process-local todo store. Clones share the same items.
#[derive(Clone, Default)]
pub struct InMemoryTodoItemsRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTodoItemsRepository {
    pub fn new() -> Self { Self::default() }

    /// Seeds the store. New ids continue after the largest seeded id.
    /// Items sharing an id collapse to the last one given.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        let last_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        let items = items.into_iter().map(|item| (item.id, item)).collect();
        Self { store: Arc::new(RwLock::new(Store { items, last_id })) }
    }
}

#[async_trait]
impl TodoItemsRepository for InMemoryTodoItemsRepository {
    async fn list_items(&self) -> Result<Vec<TodoItem>, RepositoryError> {
        Ok(self.store.read().await.items.values().cloned().collect())
    }

    async fn get_item(&self, id: TodoItemId) -> Lookup<TodoItem> {
        self.store.read().await.items.get(&id).cloned().into()
    }

    async fn create_item(&self, input: NewTodoItem) -> Result<TodoItem, RepositoryError> {
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("todo id space exhausted".into()))?;
        store.last_id = id;
        let item = TodoItem {
            id,
            title: input.title,
            created: Utc::now(),
            is_complete: input.is_complete,
        };
        store.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn toggle_item(&self, id: TodoItemId) -> Lookup<TodoItem> {
        let mut store = self.store.write().await;
        let Some(item) = store.items.get_mut(&id) else { return Lookup::Absent };
        *item = item.toggled();
        Lookup::Found(item.clone())
    }

    async fn delete_item(&self, id: TodoItemId) -> Result<bool, RepositoryError> {
        Ok(self.store.write().await.items.remove(&id).is_some())
    }
}
