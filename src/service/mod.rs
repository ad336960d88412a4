//! Order repository: the data-access contract over the `orders` table.

pub mod crud;
pub mod memory;

pub use crud::PgOrderRepository;
pub use memory::InMemoryOrderRepository;

use crate::error::AppError;
use crate::model::Order;
use async_trait::async_trait;

/// Identity-keyed access to stored orders. Each call is its own unit of work.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders, ordered by id.
    async fn find_all(&self) -> Result<Vec<Order>, AppError>;

    /// Insert the order, or replace the stored `store` when its id already exists.
    /// `None` means storage accepted the write but handed nothing back.
    async fn save(&self, order: Order) -> Result<Option<Order>, AppError>;

    /// Remove the order with this id. Removing a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
