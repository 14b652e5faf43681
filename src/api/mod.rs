//! HTTP API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::{Error, FieldError};

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    // Collection endpoints answer on both /todo and /todo/
    let collection = get(handlers::list_todos).post(handlers::create_todo);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/todo", collection.clone())
        .route("/todo/", collection)
        .route(
            "/todo/:id",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .route("/todo/:id/ongoing", post(handlers::mark_ongoing))
        .route("/todo/:id/done", post(handlers::mark_done))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wire shape of every failure response
#[derive(Debug, Serialize)]
struct ErrorBody {
    errors: Vec<FieldError>,
}

// All failures surface as 400 with a structured error array; there is no
// client/server-fault split in the status code.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let errors = match self {
            Error::Validation(errors) => errors,
            err @ Error::NotFound => vec![FieldError::bare(err.to_string())],
            other => {
                tracing::error!(error = %other, "Request failed");
                vec![FieldError::bare(other.to_string())]
            }
        };

        (StatusCode::BAD_REQUEST, Json(ErrorBody { errors })).into_response()
    }
}
