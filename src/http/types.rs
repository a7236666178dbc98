use axum::response::{IntoResponse, Response};
use axum::Json;
use ::http::{header, HeaderValue, StatusCode};
use serde::Serialize;

use crate::application::todo_handler::{ApiResponse, StatusResponse};

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            ApiResponse::Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
            ApiResponse::Created { item, location } => {
                let mut response = (StatusCode::CREATED, Json(item)).into_response();
                match HeaderValue::from_str(&location.path()) {
                    Ok(value) => { response.headers_mut().insert(header::LOCATION, value); }
                    Err(err) => tracing::warn!(error = %err, "invalid location header"),
                }
                response
            }
            ApiResponse::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiResponse::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            StatusResponse::NoContent => StatusCode::NO_CONTENT,
            StatusResponse::NotFound => StatusCode::NOT_FOUND,
            StatusResponse::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
