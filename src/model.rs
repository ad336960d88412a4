//! The Order entity as it travels over HTTP and lives in the `orders` table.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Primary key, supplied by the caller.
    pub id: i64,
    #[serde(default)]
    pub store: Option<String>,
}

impl Order {
    pub fn new(id: i64, store: impl Into<String>) -> Self {
        Order {
            id,
            store: Some(store.into()),
        }
    }
}
