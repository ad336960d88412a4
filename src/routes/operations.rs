//! Order operation routes.

use crate::handlers::{delete_operation, get_operation, post_operation, put_operation};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};
use tower_http::limit::RequestBodyLimitLayer;

pub fn operations_routes(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route(
            "/operations",
            post(post_operation).delete(delete_operation).put(put_operation),
        )
        .route("/operations/:order_id", get(get_operation))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(state)
}
