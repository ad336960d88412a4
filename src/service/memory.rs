//! In-memory `OrderRepository` for tests and running without a database.

use crate::error::AppError;
use crate::model::Order;
use crate::service::OrderRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Orders keyed by id. Cloning shares the same map.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<i64, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Lock(e.to_string())
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, AppError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders.values().cloned().collect())
    }

    async fn save(&self, order: Order) -> Result<Option<Order>, AppError> {
        let mut orders = self.orders.write().map_err(poisoned)?;
        orders.insert(order.id, order.clone());
        Ok(Some(order))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut orders = self.orders.write().map_err(poisoned)?;
        orders.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders.get(&id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
