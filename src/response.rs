//! Response bodies keyed `user`, `users` or `message`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct UserBody<T> {
    pub user: T,
}

#[derive(Serialize)]
pub struct UsersBody<T> {
    pub users: Vec<T>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn user_ok<T: Serialize>(user: T) -> (StatusCode, Json<UserBody<T>>) {
    (StatusCode::OK, Json(UserBody { user }))
}

pub fn users_ok<T: Serialize>(users: Vec<T>) -> (StatusCode, Json<UsersBody<T>>) {
    (StatusCode::OK, Json(UsersBody { users }))
}

pub fn message(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}
