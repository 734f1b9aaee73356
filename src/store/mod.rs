//! Record store: the persistence seam every handler goes through.

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::{ensure_database_exists, ensure_users_table, PgUserStore};

use crate::error::AppError;
use crate::model::{NewUser, User, UserFilter, UserPatch};
use async_trait::async_trait;
use uuid::Uuid;

/// CRUD over `User` records. `update` and `delete` are atomic: `None` means no record had that id.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, AppError>;

    async fn find_many(&self, filter: &UserFilter) -> Result<Vec<User>, AppError>;

    async fn find_unique(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<Option<User>, AppError>;

    async fn delete(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Cheap round trip for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
