//! Shared application state for all routes.

use crate::service::OrderRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new<R: OrderRepository + 'static>(orders: R) -> Self {
        AppState {
            orders: Arc::new(orders),
        }
    }
}
