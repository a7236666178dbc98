use async_trait::async_trait;
use thiserror::Error;

use super::todo::{NewTodoItem, TodoItem, TodoItemId};

/// Unexpected failure raised by a repository. Callers treat every variant the same.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("todo store unavailable: {0}")]
    Unavailable(String),
    #[error("todo store failure: {0}")]
    Storage(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Outcome of an identifier-addressed repository call.
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    Absent,
    Fault(RepositoryError),
}

impl<T> From<Result<Option<T>, RepositoryError>> for Lookup<T> {
    fn from(result: Result<Option<T>, RepositoryError>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Found(value),
            Ok(None) => Lookup::Absent,
            Err(err) => Lookup::Fault(err),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Lookup::Absent, Lookup::Found)
    }
}

/// Data access for todo items.
///
/// `list_items`, `create_item` and `delete_item` have no absent case, so they
/// return a plain `Result`. `get_item` and `toggle_item` return a [`Lookup`].
#[async_trait]
pub trait TodoItemsRepository: Send + Sync + 'static {
    async fn list_items(&self) -> Result<Vec<TodoItem>, RepositoryError>;
    async fn get_item(&self, id: TodoItemId) -> Lookup<TodoItem>;
    async fn create_item(&self, input: NewTodoItem) -> Result<TodoItem, RepositoryError>;
    /// Inverts `is_complete` on the stored item and returns the updated record.
    async fn toggle_item(&self, id: TodoItemId) -> Lookup<TodoItem>;
    /// `true` when an item existed and was removed.
    async fn delete_item(&self, id: TodoItemId) -> Result<bool, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_from_result() {
        let found: Lookup<i32> = Ok::<Option<i32>, RepositoryError>(Some(1)).into();
        assert!(matches!(found, Lookup::Found(1)));
        let absent: Lookup<i32> = Ok::<Option<i32>, RepositoryError>(None).into();
        assert!(matches!(absent, Lookup::Absent));
        let fault: Lookup<i32> = Err::<Option<i32>, _>(RepositoryError::Storage("disk".into())).into();
        match fault {
            Lookup::Fault(err) => assert_eq!(err.to_string(), "todo store failure: disk"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wraps_anyhow_errors() {
        let err: RepositoryError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
