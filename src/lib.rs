//! User service: HTTP CRUD over a single `users` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{DisplayConfig, ServiceConfig};
pub use error::{AppError, ConfigError};
pub use model::{NewUser, User, UserFilter, UserPatch};
pub use response::{message, user_ok, users_ok};
pub use routes::{app, common_routes, user_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_users_table, MemoryUserStore, PgUserStore, UserStore};
pub use validation::{UserSchema, ValidationIssue};
