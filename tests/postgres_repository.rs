//! PgOrderRepository against a live database. Skipped unless TEST_DATABASE_URL is set.

use orders_service::{ensure_orders_table, Order, OrderRepository, OrdersTable, PgOrderRepository};
use sqlx::postgres::PgPoolOptions;

async fn repository(schema: &str) -> Option<PgOrderRepository> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.unwrap();
    sqlx::query(&format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", schema))
        .execute(&pool)
        .await
        .unwrap();
    let table = OrdersTable::new(schema);
    ensure_orders_table(&pool, &table).await.unwrap();
    Some(PgOrderRepository::new(pool, table))
}

#[tokio::test]
async fn save_find_and_upsert() {
    let Some(repo) = repository("orders_test_upsert").await else {
        return;
    };

    assert_eq!(repo.save(Order::new(1, "A")).await.unwrap(), Some(Order::new(1, "A")));
    assert_eq!(repo.find_by_id(1).await.unwrap(), Some(Order::new(1, "A")));
    assert_eq!(repo.find_by_id(2).await.unwrap(), None);

    assert_eq!(repo.save(Order::new(1, "B")).await.unwrap(), Some(Order::new(1, "B")));
    assert_eq!(repo.find_all().await.unwrap(), vec![Order::new(1, "B")]);

    let nameless = Order { id: 2, store: None };
    assert_eq!(repo.save(nameless.clone()).await.unwrap(), Some(nameless));
}

#[tokio::test]
async fn find_all_and_delete_by_id() {
    let Some(repo) = repository("orders_test_delete").await else {
        return;
    };

    repo.save(Order::new(2, "b")).await.unwrap();
    repo.save(Order::new(1, "a")).await.unwrap();
    assert_eq!(repo.find_all().await.unwrap(), vec![Order::new(1, "a"), Order::new(2, "b")]);

    repo.delete_by_id(1).await.unwrap();
    repo.delete_by_id(42).await.unwrap();
    assert_eq!(repo.find_all().await.unwrap(), vec![Order::new(2, "b")]);
    repo.ping().await.unwrap();
}

#[tokio::test]
async fn ensure_orders_table_is_idempotent() {
    let Some(repo) = repository("orders_test_idempotent").await else {
        return;
    };
    repo.save(Order::new(5, "kept")).await.unwrap();
    ensure_orders_table(repo.pool(), &OrdersTable::new("orders_test_idempotent"))
        .await
        .unwrap();
    assert_eq!(repo.find_by_id(5).await.unwrap(), Some(Order::new(5, "kept")));
}
