//! Load `ServiceConfig` from the process environment or any key lookup.

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl ServiceConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve every field through `lookup`. Unset and empty values fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = ServiceConfig::default();
        Ok(ServiceConfig {
            db_host: get("DB_HOST").unwrap_or(defaults.db_host),
            db_port: parse_or(get("DB_PORT"), "DB_PORT", defaults.db_port)?,
            db_user: get("DB_USER").unwrap_or(defaults.db_user),
            db_password: get("DB_PASSWORD").unwrap_or(defaults.db_password),
            db_name: get("DB_NAME").unwrap_or(defaults.db_name),
            database_url: get("DATABASE_URL"),
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            users_table: get("USERS_TABLE").unwrap_or(defaults.users_table),
            env_test: get("TEST_ENV_VAR").unwrap_or(defaults.env_test),
            port: parse_or(get("PORT"), "PORT", defaults.port)?,
            body_limit_bytes: parse_or(get("BODY_LIMIT_BYTES"), "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, var: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::InvalidValue { var, value })
        }
        None => Ok(default),
    }
}
