//! Schema validation for the create payload.

use crate::error::AppError;
use crate::model::NewUser;
use serde::Serialize;
use serde_json::{Map, Value};

/// One failed check: which field, and why.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: &str, message: impl Into<String>) -> Self {
        ValidationIssue {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// `{email, name, phone, address}`, all required strings. Extra keys are dropped.
pub struct UserSchema;

impl UserSchema {
    pub const REQUIRED: [&'static str; 4] = ["email", "name", "phone", "address"];

    /// Check every field and report all issues at once.
    pub fn validate(body: &Value) -> Result<NewUser, AppError> {
        let Value::Object(map) = body else {
            return Err(AppError::Validation(vec![ValidationIssue::new(
                "",
                format!("Expected object, received {}", type_name(body)),
            )]));
        };
        let issues: Vec<ValidationIssue> = Self::REQUIRED
            .iter()
            .filter_map(|field| check_string(map, field))
            .collect();
        if !issues.is_empty() {
            return Err(AppError::Validation(issues));
        }
        let take = |field: &str| map.get(field).and_then(Value::as_str).unwrap_or_default().to_string();
        Ok(NewUser {
            email: take("email"),
            name: take("name"),
            phone: take("phone"),
            address: take("address"),
        })
    }
}

fn check_string(map: &Map<String, Value>, field: &str) -> Option<ValidationIssue> {
    match map.get(field) {
        None => Some(ValidationIssue::new(field, "Required")),
        Some(Value::String(_)) => None,
        Some(other) => Some(ValidationIssue::new(
            field,
            format!("Expected string, received {}", type_name(other)),
        )),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
