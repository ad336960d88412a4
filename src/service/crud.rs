//! `OrderRepository` backed by PostgreSQL.

use crate::error::AppError;
use crate::model::Order;
use crate::service::OrderRepository;
use crate::sql::{bind_params, order_from_row, OrdersTable, QueryBuf};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
    table: OrdersTable,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool, table: OrdersTable) -> Self {
        PgOrderRepository { pool, table }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn query_one(&self, q: &QueryBuf) -> Result<Option<Order>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_params(sqlx::query(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(order_from_row).transpose()?)
    }

    async fn query_many(&self, q: &QueryBuf) -> Result<Vec<Order>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_params(sqlx::query(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(order_from_row).collect::<Result<Vec<_>, _>>()?)
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let result = bind_params(sqlx::query(&q.sql), &q.params)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, AppError> {
        self.query_many(&self.table.select_all()).await
    }

    async fn save(&self, order: Order) -> Result<Option<Order>, AppError> {
        self.query_one(&self.table.upsert(&order)).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let affected = self.execute(&self.table.delete_by_id(id)).await?;
        tracing::debug!(id, affected, "delete_by_id");
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        self.query_one(&self.table.select_by_id(id)).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        let q = QueryBuf {
            sql: "SELECT 1".into(),
            params: Vec::new(),
        };
        self.execute(&q).await?;
        Ok(())
    }
}
