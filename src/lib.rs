//! Orders service: a small REST API over a single PostgreSQL `orders` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use model::Order;
pub use routes::{app, common_routes_with_ready, greeting_routes, operations_routes};
pub use service::{InMemoryOrderRepository, OrderRepository, PgOrderRepository};
pub use sql::OrdersTable;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_orders_table};
