use async_trait::async_trait;
use axum::body::to_bytes;
use axum::Router;
use serde_json::json;
use todo_api::application::todo_handler::TodoItemsHandler;
use todo_api::domain::repository::{Lookup, RepositoryError, TodoItemsRepository};
use todo_api::domain::todo::{NewTodoItem, TodoItem, TodoItemId};
use todo_api::http::routing::{self, todos};
use todo_api::infrastructure::memory_repo::InMemoryTodoItemsRepository;

fn app_with<R: TodoItemsRepository + Clone>(repo: R) -> Router {
    routing::app(todos::router(todos::AppState { controller: TodoItemsHandler::new(repo) }))
}

#[tokio::test]
async fn acceptance_create_list_get_switch_delete() {
    let app = app_with(InMemoryTodoItemsRepository::new());

    // create
    let res = request(&app, "POST", "/api/todoitems", Some(json!({ "title": "Title1" }))).await;
    assert_eq!(res.status(), 201);
    assert_eq!(res.headers().get("location").unwrap(), "/api/todoitems/1");
    let body = json_body(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Title1");
    assert_eq!(body["isComplete"], false);

    // list
    let res = request(&app, "GET", "/api/todoitems", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(json_body(res).await.as_array().unwrap().len(), 1);

    // get
    let res = request(&app, "GET", "/api/todoitems/1", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(json_body(res).await["title"], "Title1");

    // switch
    let res = request(&app, "PUT", "/api/todoitems/1/switch", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(json_body(res).await["isComplete"], true);

    // delete
    let res = request(&app, "DELETE", "/api/todoitems/1", None).await;
    assert_eq!(res.status(), 204);
    assert!(raw_body(res).await.is_empty());

    // gone
    let res = request(&app, "GET", "/api/todoitems/1", None).await;
    assert_eq!(res.status(), 404);
    let res = request(&app, "PUT", "/api/todoitems/1/switch", None).await;
    assert_eq!(res.status(), 404);
    let res = request(&app, "DELETE", "/api/todoitems/1", None).await;
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn empty_list_is_ok() {
    let app = app_with(InMemoryTodoItemsRepository::new());
    let res = request(&app, "GET", "/api/todoitems", None).await;
    assert_eq!(res.status(), 200);
    assert_eq!(json_body(res).await, json!([]));
}

#[tokio::test]
async fn health_is_ok() {
    let app = app_with(InMemoryTodoItemsRepository::new());
    let res = request(&app, "GET", "/health", None).await;
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn malformed_id_is_rejected_before_handler() {
    let app = app_with(BrokenRepo);
    let res = request(&app, "GET", "/api/todoitems/abc", None).await;
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn malformed_create_body_is_rejected_before_handler() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = app_with(BrokenRepo);

    let bad_syntax = Request::builder()
        .method("POST")
        .uri("/api/todoitems")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\":"))
        .unwrap();
    let res = app.clone().oneshot(bad_syntax).await.unwrap();
    assert_eq!(res.status(), 400);

    let res = request(&app, "POST", "/api/todoitems", Some(json!({ "name": "Title1" }))).await;
    assert_eq!(res.status(), 422);

    let res = request(&app, "POST", "/api/todoitems", Some(json!({ "title": 1 }))).await;
    assert_eq!(res.status(), 422);
}

#[derive(Clone)]
struct BrokenRepo;

#[async_trait]
impl TodoItemsRepository for BrokenRepo {
    async fn list_items(&self) -> Result<Vec<TodoItem>, RepositoryError> { Err(broken()) }
    async fn get_item(&self, _id: TodoItemId) -> Lookup<TodoItem> { Lookup::Fault(broken()) }
    async fn create_item(&self, _input: NewTodoItem) -> Result<TodoItem, RepositoryError> { Err(broken()) }
    async fn toggle_item(&self, _id: TodoItemId) -> Lookup<TodoItem> { Lookup::Fault(broken()) }
    async fn delete_item(&self, _id: TodoItemId) -> Result<bool, RepositoryError> { Err(broken()) }
}

fn broken() -> RepositoryError { RepositoryError::Storage("secret table todo_items is locked".into()) }

#[tokio::test]
async fn faults_surface_as_bare_500() {
    let app = app_with(BrokenRepo);
    let calls = [
        ("GET", "/api/todoitems", None),
        ("GET", "/api/todoitems/1", None),
        ("POST", "/api/todoitems", Some(json!({ "title": "Title1" }))),
        ("PUT", "/api/todoitems/1/switch", None),
        ("DELETE", "/api/todoitems/1", None),
    ];
    for (method, path, body) in calls {
        let res = request(&app, method, path, body).await;
        assert_eq!(res.status(), 500, "{method} {path}");
        assert!(raw_body(res).await.is_empty(), "{method} {path} leaked a body");
    }
}

async fn json_body(res: hyper::Response<axum::body::Body>) -> serde_json::Value {
    serde_json::from_slice(&raw_body(res).await).unwrap()
}

async fn raw_body(res: hyper::Response<axum::body::Body>) -> Vec<u8> {
    to_bytes(res.into_body(), 1024 * 1024).await.unwrap().to_vec()
}

async fn request(app: &Router, method: &str, path: &str, body: Option<serde_json::Value>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Request, Method};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(json) => req.header("content-type", "application/json").body(Body::from(json.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}
