//! In-process store. Each operation runs under one lock acquisition.

use super::UserStore;
use crate::error::AppError;
use crate::model::{NewUser, User, UserFilter, UserPatch};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Records kept in insertion order.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let user = user.into_user(Uuid::new_v4());
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_many(&self, filter: &UserFilter) -> Result<Vec<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| filter.matches(u)).cloned().collect())
    }

    async fn find_unique(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|u| {
            patch.apply(u);
            u.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().await;
        Ok(users
            .iter()
            .position(|u| u.id == id)
            .map(|idx| users.remove(idx)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.into(),
            phone: "555".into(),
            address: "Main St".into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = MemoryUserStore::new();
        let a = store.create(new_user("Alice")).await.unwrap();
        let b = store.create(new_user("Bob")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.find_unique(a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn find_many_keeps_insertion_order() {
        let store = MemoryUserStore::new();
        for name in ["Carol", "Alice", "Bob", "Alice"] {
            store.create(new_user(name)).await.unwrap();
        }
        let all = store.find_many(&UserFilter::default()).await.unwrap();
        let names: Vec<_> = all.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob", "Alice"]);
        let filter = UserFilter { name: Some("Alice".into()), ..Default::default() };
        assert_eq!(store.find_many(&filter).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_and_delete_missing_ids_change_nothing() {
        let store = MemoryUserStore::new();
        let a = store.create(new_user("Alice")).await.unwrap();
        let patch = UserPatch { name: Some("Zed".into()), ..Default::default() };
        assert_eq!(store.update(Uuid::new_v4(), &patch).await.unwrap(), None);
        assert_eq!(store.delete(Uuid::new_v4()).await.unwrap(), None);
        assert_eq!(store.find_unique(a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = MemoryUserStore::new();
        let a = store.create(new_user("Alice")).await.unwrap();
        assert_eq!(store.delete(a.id).await.unwrap().map(|u| u.id), Some(a.id));
        assert!(store.is_empty().await);
        assert_eq!(store.find_unique(a.id).await.unwrap(), None);
    }
}
