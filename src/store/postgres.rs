//! PostgreSQL-backed store. One statement per operation.

use super::UserStore;
use crate::error::{AppError, ConfigError};
use crate::model::{NewUser, User, UserFilter, UserPatch};
use crate::sql::{create_users_table, delete_user, insert_user, quoted, select_user_by_id, select_users, update_user};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
    /// Quoted table identifier.
    table: String,
}

impl PgUserStore {
    pub fn new(pool: PgPool, table: &str) -> Self {
        PgUserStore {
            pool,
            table: quoted(table),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut q = insert_user(&self.table, &user);
        tracing::debug!(sql = %q.sql(), "query");
        let row = q.build_query_as::<User>().fetch_one(&self.pool).await?;
        Ok(row)
    }

    async fn find_many(&self, filter: &UserFilter) -> Result<Vec<User>, AppError> {
        let mut q = select_users(&self.table, filter);
        tracing::debug!(sql = %q.sql(), filter = ?filter, "query");
        let rows = q.build_query_as::<User>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_unique(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let mut q = select_user_by_id(&self.table, id);
        tracing::debug!(sql = %q.sql(), %id, "query");
        let row = q.build_query_as::<User>().fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<Option<User>, AppError> {
        let Some(mut q) = update_user(&self.table, id, patch) else {
            return self.find_unique(id).await;
        };
        tracing::debug!(sql = %q.sql(), %id, "query");
        let row = q.build_query_as::<User>().fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let mut q = delete_user(&self.table, id);
        tracing::debug!(sql = %q.sql(), %id, "query");
        let row = q.build_query_as::<User>().fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the users table if missing. Requires PostgreSQL 13+ for `gen_random_uuid()`.
pub async fn ensure_users_table(pool: &PgPool, table: &str) -> Result<(), AppError> {
    let ddl = create_users_table(&quoted(table));
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table, "users table ready");
    Ok(())
}

/// Connect to the server's `postgres` database and create the target database if it does not exist.
/// A URL without a database name is left to the server default.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_options(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Options for the `postgres` maintenance database plus the target name, or `None` when there is nothing to create.
fn admin_options(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_database_name_from_path() {
        let (admin, name) = admin_options("postgres://u:p@localhost:5432/people?sslmode=disable")
            .unwrap()
            .unwrap();
        assert_eq!(name, "people");
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_port(), 5432);
    }

    #[test]
    fn slash_in_query_does_not_move_the_name() {
        let (admin, name) = admin_options("postgres://u@h:5432/app?sslrootcert=/etc/ssl/ca.pem")
            .unwrap()
            .unwrap();
        assert_eq!(name, "app");
        assert_eq!(admin.get_host(), "h");
    }

    #[test]
    fn no_database_or_maintenance_database_needs_nothing() {
        assert!(admin_options("postgres://u@localhost:5432").unwrap().is_none());
        assert!(admin_options("postgres://u@localhost:5432/postgres").unwrap().is_none());
    }

    #[test]
    fn unparsable_url_is_a_config_error() {
        let err = admin_options("not a url").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::InvalidUrl(_))));
    }
}
