use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::todos::inbound::http as todos_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(todos_http::index))
        .route("/api/todos", post(todos_http::create).get(todos_http::list))
        .route(
            "/api/todos/{id}",
            get(todos_http::get_by_id)
                .put(todos_http::replace)
                .patch(todos_http::patch)
                .delete(todos_http::remove),
        )
        .fallback(todos_http::endpoint_not_found)
        .method_not_allowed_fallback(todos_http::endpoint_not_found)
        .with_state(state)
}
