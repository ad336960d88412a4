//! Explicit mapping between `Order` and query parameters / result rows.

use crate::model::Order;
use sqlx::postgres::{PgArguments, PgRow, Postgres};
use sqlx::query::Query;
use sqlx::Row;

/// A value bound to a statement parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    I64(i64),
    Text(String),
    NullText,
}

/// Insert/update parameters for an order, in column order (`id`, `store`).
pub fn order_params(order: &Order) -> Vec<BindValue> {
    vec![
        BindValue::I64(order.id),
        match &order.store {
            Some(s) => BindValue::Text(s.clone()),
            None => BindValue::NullText,
        },
    ]
}

pub fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &[BindValue],
) -> Query<'q, Postgres, PgArguments> {
    for p in params {
        query = match p {
            BindValue::I64(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.clone()),
            BindValue::NullText => query.bind(None::<String>),
        };
    }
    query
}

/// Build an order from a row selected as `id, store`.
pub fn order_from_row(row: &PgRow) -> Result<Order, sqlx::Error> {
    Ok(Order {
        id: row.try_get("id")?,
        store: row.try_get("store")?,
    })
}
