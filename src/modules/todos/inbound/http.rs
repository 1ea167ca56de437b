use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::inputs::{CreateTodoInput, PatchTodoInput};
use crate::shell::state::AppState;

/// Uniform response wrapper used on every endpoint. Field presence varies per
/// case: list carries `count` + `data`, single-record success carries `data`
/// (plus `message` for create/update/delete), failures carry `message` and,
/// for 500s, `error`.
#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn list(data: T, count: usize) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(count),
            data: Some(data),
            error: None,
        }
    }

    pub fn record(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn record_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            error: None,
        }
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::failure("Internal server error")
        }
    }
}

fn error_response(err: TodoError) -> Response {
    let status = match err {
        TodoError::Validation(_) => StatusCode::BAD_REQUEST,
        TodoError::NotFound(_) => StatusCode::NOT_FOUND,
        TodoError::Internal(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::internal(err.to_string())),
            )
                .into_response();
        }
    };
    (status, Json(Envelope::failure(err.to_string()))).into_response()
}

/// A body that fails typed deserialization (malformed JSON, wrong field
/// types) is a validation failure, not a transport error.
fn rejection_response(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(Envelope::failure(rejection.body_text())),
    )
        .into_response()
}

pub async fn index() -> impl IntoResponse {
    let metadata = serde_json::json!({
        "name": "todos_api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "listTodos": "GET /api/todos?completed=true|false",
            "getTodo": "GET /api/todos/{id}",
            "createTodo": "POST /api/todos",
            "replaceTodo": "PUT /api/todos/{id}",
            "patchTodo": "PATCH /api/todos/{id}",
            "deleteTodo": "DELETE /api/todos/{id}",
        },
    });
    Json(Envelope::record_with_message("Todos API", metadata))
}

pub async fn endpoint_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::failure("Endpoint not found")),
    )
}

#[derive(Deserialize)]
pub struct ListTodosParams {
    pub completed: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListTodosParams>,
) -> impl IntoResponse {
    // Loose coercion on purpose: only the literal token "true" selects
    // completed records, any other value selects pending ones, and an absent
    // parameter disables filtering.
    let filter = params.completed.map(|v| v == "true");
    let todos = state.store.list(filter).await;
    let count = todos.len();
    Json(Envelope::list(todos, count))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&id).await {
        Ok(todo) => Json(Envelope::record(todo)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };
    match state.store.create(input).await {
        Ok(todo) => (
            StatusCode::CREATED,
            Json(Envelope::record_with_message("Todo created", todo)),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CreateTodoInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };
    match state.store.replace(&id, input).await {
        Ok(todo) => Json(Envelope::record_with_message("Todo updated", todo)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PatchTodoInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };
    match state.store.patch(&id, input).await {
        Ok(todo) => Json(Envelope::record_with_message("Todo updated", todo)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store.remove(&id).await {
        Ok(todo) => Json(Envelope::record_with_message("Todo deleted", todo)).into_response(),
        Err(err) => error_response(err),
    }
}
