//! Service configuration read from the environment (`.env` honoured by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/orders";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Schema holding the `orders` table. Must be a plain SQL identifier.
    pub schema: String,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Missing or empty keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "BIND_ADDR",
            reason: format!("'{}' is not a socket address", bind_raw),
        })?;

        let schema = get("ORDERS_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_identifier(&schema) {
            return Err(ConfigError::Invalid {
                var: "ORDERS_SCHEMA",
                reason: format!("'{}' is not a valid identifier", schema),
            });
        }

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "DB_MAX_CONNECTIONS",
                    reason: format!("'{}' is not a positive integer", v),
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(v) => v.parse::<usize>().map_err(|_| ConfigError::Invalid {
                var: "BODY_LIMIT_BYTES",
                reason: format!("'{}' is not an integer", v),
            })?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        Ok(ServiceConfig {
            database_url,
            bind_addr,
            schema,
            max_connections,
            body_limit_bytes,
        })
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServiceConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.schema, "public");
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.body_limit_bytes, 65536);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config_from(&[
            ("DATABASE_URL", "postgres://db:5432/shop"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("ORDERS_SCHEMA", "sales"),
            ("DB_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://db:5432/shop");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.schema, "sales");
        assert_eq!(cfg.max_connections, 12);
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let cfg = config_from(&[("ORDERS_SCHEMA", "  ")]).unwrap();
        assert_eq!(cfg.schema, "public");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::Invalid { var: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            config_from(&[("ORDERS_SCHEMA", "bad;drop")]),
            Err(ConfigError::Invalid { var: "ORDERS_SCHEMA", .. })
        ));
        assert!(matches!(
            config_from(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config_from(&[("BODY_LIMIT_BYTES", "lots")]),
            Err(ConfigError::Invalid { var: "BODY_LIMIT_BYTES", .. })
        ));
    }
}
