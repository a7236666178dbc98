use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::application::todo_handler::{ApiResponse, StatusResponse, TodoItemsController, TODO_ITEMS_PATH};
use crate::domain::todo::{NewTodoItem, TodoItem, TodoItemId};

#[derive(Clone)]
pub struct AppState<C: TodoItemsController> { pub controller: C }

pub fn router<C: TodoItemsController + Clone>(state: AppState<C>) -> Router {
    Router::new()
        .route(TODO_ITEMS_PATH, get(list_todo_items::<C>).post(create_todo_item::<C>))
        .route(&format!("{TODO_ITEMS_PATH}/:id"), get(get_todo_item::<C>).delete(delete_todo_item::<C>))
        .route(&format!("{TODO_ITEMS_PATH}/:id/switch"), put(switch_todo_item::<C>))
        .with_state(state)
}

async fn list_todo_items<C: TodoItemsController>(State(state): State<AppState<C>>) -> ApiResponse<Vec<TodoItem>> {
    state.controller.get_todo_items().await
}

async fn get_todo_item<C: TodoItemsController>(State(state): State<AppState<C>>, Path(id): Path<TodoItemId>) -> ApiResponse<TodoItem> {
    state.controller.get_todo_item(id).await
}

async fn create_todo_item<C: TodoItemsController>(State(state): State<AppState<C>>, Json(payload): Json<NewTodoItem>) -> ApiResponse<TodoItem> {
    state.controller.create_todo_item(payload).await
}

async fn switch_todo_item<C: TodoItemsController>(State(state): State<AppState<C>>, Path(id): Path<TodoItemId>) -> ApiResponse<TodoItem> {
    state.controller.switch_todo_item(id).await
}

async fn delete_todo_item<C: TodoItemsController>(State(state): State<AppState<C>>, Path(id): Path<TodoItemId>) -> StatusResponse {
    state.controller.delete_todo_item(id).await
}
