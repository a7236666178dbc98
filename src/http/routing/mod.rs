pub mod todos;

use axum::{routing::get, Router};

async fn health() -> &'static str { "ok" }

/// Root router: liveness probe plus the todo item routes.
pub fn app(todo_items: Router) -> Router {
    Router::new().route("/health", get(health)).merge(todo_items)
}
