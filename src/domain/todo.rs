use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TodoItemId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoItemId,
    pub title: String,
    pub created: DateTime<Utc>,
    pub is_complete: bool,
}

impl TodoItem {
    /// Copy of the item with `is_complete` inverted.
    pub fn toggled(&self) -> Self {
        Self { is_complete: !self.is_complete, ..self.clone() }
    }
}

/// Create payload. `id` and `created` are assigned by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodoItem {
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl NewTodoItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), is_complete: false }
    }
}
