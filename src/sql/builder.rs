//! Builds the parameterized statements run against the `orders` table.

use crate::model::Order;
use crate::sql::params::{order_params, BindValue};

pub const ORDERS_TABLE: &str = "orders";

/// Quote identifier for PostgreSQL.
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

/// Location of the `orders` table.
#[derive(Clone, Debug)]
pub struct OrdersTable {
    schema: String,
}

impl OrdersTable {
    pub fn new(schema: impl Into<String>) -> Self {
        OrdersTable { schema: schema.into() }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Schema-qualified, quoted table name, e.g. `"public"."orders"`.
    pub fn qualified(&self) -> String {
        format!("{}.{}", quoted(&self.schema), quoted(ORDERS_TABLE))
    }

    pub fn create_schema(&self) -> String {
        format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(&self.schema))
    }

    pub fn create_table(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (id BIGINT PRIMARY KEY, store TEXT)",
            self.qualified()
        )
    }

    pub fn select_by_id(&self, id: i64) -> QueryBuf {
        QueryBuf {
            sql: format!("SELECT id, store FROM {} WHERE id = $1", self.qualified()),
            params: vec![BindValue::I64(id)],
        }
    }

    pub fn select_all(&self) -> QueryBuf {
        QueryBuf {
            sql: format!("SELECT id, store FROM {} ORDER BY id", self.qualified()),
            params: Vec::new(),
        }
    }

    /// Insert, or replace `store` when the id already exists. Returns the stored row.
    pub fn upsert(&self, order: &Order) -> QueryBuf {
        QueryBuf {
            sql: format!(
                "INSERT INTO {} (id, store) VALUES ($1, $2) \
                 ON CONFLICT (id) DO UPDATE SET store = EXCLUDED.store \
                 RETURNING id, store",
                self.qualified()
            ),
            params: order_params(order),
        }
    }

    pub fn delete_by_id(&self, id: i64) -> QueryBuf {
        QueryBuf {
            sql: format!("DELETE FROM {} WHERE id = $1", self.qualified()),
            params: vec![BindValue::I64(id)],
        }
    }
}
