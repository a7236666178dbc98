//! Translates repository outcomes into API responses.
//!
//! Every operation matches exhaustively on what the repository returned:
//! a value maps to a success shape, absence maps to `NotFound`, and any
//! fault is logged and collapsed into `ServerError`.

use async_trait::async_trait;

use crate::domain::repository::{Lookup, RepositoryError, TodoItemsRepository};
use crate::domain::todo::{NewTodoItem, TodoItem, TodoItemId};

pub const TODO_ITEMS_PATH: &str = "/api/todoitems";

/// Where a created item can be fetched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLocation {
    pub id: TodoItemId,
}

impl ItemLocation {
    pub fn path(&self) -> String {
        format!("{TODO_ITEMS_PATH}/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Ok(T),
    Created { item: T, location: ItemLocation },
    NotFound,
    ServerError,
}

/// Payload-free result of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusResponse {
    NoContent,
    NotFound,
    ServerError,
}

#[async_trait]
pub trait TodoItemsController: Send + Sync + 'static {
    async fn get_todo_items(&self) -> ApiResponse<Vec<TodoItem>>;
    async fn get_todo_item(&self, id: TodoItemId) -> ApiResponse<TodoItem>;
    async fn create_todo_item(&self, input: NewTodoItem) -> ApiResponse<TodoItem>;
    async fn switch_todo_item(&self, id: TodoItemId) -> ApiResponse<TodoItem>;
    async fn delete_todo_item(&self, id: TodoItemId) -> StatusResponse;
}

#[derive(Clone)]
pub struct TodoItemsHandler<R: TodoItemsRepository> {
    repo: R,
}

impl<R: TodoItemsRepository> TodoItemsHandler<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoItemsRepository> TodoItemsController for TodoItemsHandler<R> {
    async fn get_todo_items(&self) -> ApiResponse<Vec<TodoItem>> {
        match self.repo.list_items().await {
            Ok(items) => ApiResponse::Ok(items),
            Err(err) => fault("get_todo_items", None, &err),
        }
    }

    async fn get_todo_item(&self, id: TodoItemId) -> ApiResponse<TodoItem> {
        match self.repo.get_item(id).await {
            Lookup::Found(item) => ApiResponse::Ok(item),
            Lookup::Absent => absent("get_todo_item", id),
            Lookup::Fault(err) => fault("get_todo_item", Some(id), &err),
        }
    }

    async fn create_todo_item(&self, input: NewTodoItem) -> ApiResponse<TodoItem> {
        match self.repo.create_item(input).await {
            Ok(item) => {
                let location = ItemLocation { id: item.id };
                tracing::info!(id = item.id, "todo item created");
                ApiResponse::Created { item, location }
            }
            Err(err) => fault("create_todo_item", None, &err),
        }
    }

    async fn switch_todo_item(&self, id: TodoItemId) -> ApiResponse<TodoItem> {
        match self.repo.toggle_item(id).await {
            Lookup::Found(item) => ApiResponse::Ok(item),
            Lookup::Absent => absent("switch_todo_item", id),
            Lookup::Fault(err) => fault("switch_todo_item", Some(id), &err),
        }
    }

    async fn delete_todo_item(&self, id: TodoItemId) -> StatusResponse {
        match self.repo.delete_item(id).await {
            Ok(true) => StatusResponse::NoContent,
            Ok(false) => {
                tracing::debug!(operation = "delete_todo_item", id, "todo item not found");
                StatusResponse::NotFound
            }
            Err(err) => {
                log_fault("delete_todo_item", Some(id), &err);
                StatusResponse::ServerError
            }
        }
    }
}

fn absent<T>(operation: &'static str, id: TodoItemId) -> ApiResponse<T> {
    tracing::debug!(operation, id, "todo item not found");
    ApiResponse::NotFound
}

fn fault<T>(operation: &'static str, id: Option<TodoItemId>, err: &RepositoryError) -> ApiResponse<T> {
    log_fault(operation, id, err);
    ApiResponse::ServerError
}

fn log_fault(operation: &'static str, id: Option<TodoItemId>, err: &RepositoryError) {
    tracing::error!(operation, id = ?id, error = %err, "repository fault");
}
