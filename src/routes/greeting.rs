use crate::handlers::greeting;
use axum::{routing::any, Router};

/// GET /greeting, answered for any method.
pub fn greeting_routes() -> Router {
    Router::new().route("/greeting", any(greeting))
}
