pub mod common;
pub mod greeting;
pub mod operations;

pub use common::common_routes_with_ready;
pub use greeting::greeting_routes;
pub use operations::operations_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application router: greeting, order operations, and health/readiness.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(greeting_routes())
        .merge(operations_routes(state.clone(), body_limit))
        .merge(common_routes_with_ready(state))
        .layer(TraceLayer::new_for_http())
}
