//! The `User` record and the payloads that create, patch and filter it.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Create payload. Built by `UserSchema::validate`, so every field is present.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl NewUser {
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            address: self.address,
        }
    }
}

/// Update payload: only present fields are replaced. Unknown keys, `id` included, are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UserPatch {
    /// Present fields as (column, value), in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("email", self.email.as_deref()),
            ("name", self.name.as_deref()),
            ("phone", self.phone.as_deref()),
            ("address", self.address.as_deref()),
        ]
        .into_iter()
        .filter_map(|(col, v)| v.map(|v| (col, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    pub fn apply(&self, user: &mut User) {
        if let Some(v) = &self.email {
            user.email = v.clone();
        }
        if let Some(v) = &self.name {
            user.name = v.clone();
        }
        if let Some(v) = &self.phone {
            user.phone = v.clone();
        }
        if let Some(v) = &self.address {
            user.address = v.clone();
        }
    }
}

/// Raw `GET /users` query string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UserQuery {
    /// First occurrence of a repeated key wins; other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = UserQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "id" => &mut query.id,
                "name" => &mut query.name,
                "phone" => &mut query.phone,
                "address" => &mut query.address,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Equality filters. `None` imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UserFilter {
    /// Empty strings count as absent. A present `id` must be a UUID.
    pub fn from_query(query: UserQuery) -> Result<Self, AppError> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        let id = present(query.id).map(|s| parse_id(&s)).transpose()?;
        Ok(UserFilter {
            id,
            name: present(query.name),
            phone: present(query.phone),
            address: present(query.address),
        })
    }

    /// Present text constraints as (column, value).
    pub fn text_constraints(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("phone", self.phone.as_deref()),
            ("address", self.address.as_deref()),
        ]
        .into_iter()
        .filter_map(|(col, v)| v.map(|v| (col, v)))
    }

    pub fn matches(&self, user: &User) -> bool {
        if self.id.is_some_and(|id| id != user.id) {
            return false;
        }
        self.text_constraints().all(|(col, v)| match col {
            "name" => user.name == v,
            "phone" => user.phone == v,
            "address" => user.address == v,
            _ => false,
        })
    }
}

pub fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}
