//! Database lifecycle: create the database if needed, open the pool, ensure the `orders` table.

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::sql::builder::quoted;
use crate::sql::OrdersTable;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Create the database named in `database_url` when it does not exist yet.
/// Connects to the `postgres` admin database on the same server to check and create.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_opts, db_name) = admin_options(database_url)?;
    let db_name = match db_name {
        Some(name) if !name.is_empty() && name != "postgres" => name,
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = admin_opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Open the connection pool used for the lifetime of the process.
pub async fn connect(config: &ServiceConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Create the schema and `orders` table if missing. Existing data is left untouched.
pub async fn ensure_orders_table(pool: &PgPool, table: &OrdersTable) -> Result<(), AppError> {
    sqlx::query(&table.create_schema()).execute(pool).await?;
    sqlx::query(&table.create_table()).execute(pool).await?;
    tracing::info!(table = %table.qualified(), "orders table ready");
    Ok(())
}

/// Options for the `postgres` admin database on the same server, plus the target database name.
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = opts.get_database().map(str::to_string);
    Ok((opts.database("postgres"), db_name))
}
