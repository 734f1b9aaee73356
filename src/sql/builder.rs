//! Builds INSERT, SELECT, UPDATE, DELETE over the users table.

use crate::model::{NewUser, UserFilter, UserPatch};
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

/// Columns returned by every statement, in `User` field order.
pub const USER_COLUMNS: &str = "\"id\", \"email\", \"name\", \"phone\", \"address\"";

/// Quote identifier for PostgreSQL (safe: only from config).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn insert_user<'a>(table: &str, user: &'a NewUser) -> QueryBuilder<'a, Postgres> {
    let mut q = QueryBuilder::new(format!(
        "INSERT INTO {} (\"email\", \"name\", \"phone\", \"address\") VALUES (",
        table
    ));
    let mut values = q.separated(", ");
    values.push_bind(user.email.as_str());
    values.push_bind(user.name.as_str());
    values.push_bind(user.phone.as_str());
    values.push_bind(user.address.as_str());
    q.push(format!(") RETURNING {}", USER_COLUMNS));
    q
}

/// SELECT with one `col = $n` per present filter, joined by AND. No filters selects all rows.
pub fn select_users<'a>(table: &str, filter: &'a UserFilter) -> QueryBuilder<'a, Postgres> {
    let mut q = QueryBuilder::new(format!("SELECT {} FROM {}", USER_COLUMNS, table));
    let mut first = true;
    let mut keyword = |q: &mut QueryBuilder<'a, Postgres>| {
        q.push(if first { " WHERE " } else { " AND " });
        first = false;
    };
    if let Some(id) = filter.id {
        keyword(&mut q);
        q.push("\"id\" = ").push_bind(id);
    }
    for (col, value) in filter.text_constraints() {
        keyword(&mut q);
        q.push(format!("{} = ", quoted(col))).push_bind(value);
    }
    q
}

pub fn select_user_by_id(table: &str, id: Uuid) -> QueryBuilder<'static, Postgres> {
    let mut q = QueryBuilder::new(format!("SELECT {} FROM {} WHERE \"id\" = ", USER_COLUMNS, table));
    q.push_bind(id);
    q
}

/// UPDATE of the present patch fields, conditional on the id. `None` when the patch is empty.
pub fn update_user<'a>(table: &str, id: Uuid, patch: &'a UserPatch) -> Option<QueryBuilder<'a, Postgres>> {
    if patch.is_empty() {
        return None;
    }
    let mut q = QueryBuilder::new(format!("UPDATE {} SET ", table));
    let mut sets = q.separated(", ");
    for (col, value) in patch.fields() {
        sets.push(format!("{} = ", quoted(col)));
        sets.push_bind_unseparated(value);
    }
    q.push(" WHERE \"id\" = ").push_bind(id);
    q.push(format!(" RETURNING {}", USER_COLUMNS));
    Some(q)
}

pub fn delete_user(table: &str, id: Uuid) -> QueryBuilder<'static, Postgres> {
    let mut q = QueryBuilder::new(format!("DELETE FROM {} WHERE \"id\" = ", table));
    q.push_bind(id);
    q.push(format!(" RETURNING {}", USER_COLUMNS));
    q
}

/// Idempotent DDL run at boot.
pub fn create_users_table(table: &str) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {} (
            "id" UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            "email" TEXT NOT NULL,
            "name" TEXT NOT NULL,
            "phone" TEXT NOT NULL,
            "address" TEXT NOT NULL
        )"#,
        table
    )
}
