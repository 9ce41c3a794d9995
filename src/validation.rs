//! Create-payload validation. Violations are collected per field, never
//! short-circuited, so a bad payload reports every offending field at once.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One validation violation, serialized into the 400 response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Validate a create body against the Character schema. Returns every
/// violation found; an empty vec means the payload is acceptable.
pub fn validate_create(body: &Map<String, Value>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_integer(body, "id", &mut errors);
    for field in ["height", "mass", "birth_year"] {
        check_positive_integer(body, field, &mut errors);
    }
    for field in ["name", "hair_color", "skin_color", "eye_color"] {
        check_non_empty_string(body, field, &mut errors);
    }
    errors
}

fn check_integer(body: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) {
    match body.get(field) {
        None | Some(Value::Null) => errors.push(FieldError::new(field, "is required")),
        Some(Value::Number(n)) if n.as_i64().is_some() => {}
        Some(_) => errors.push(FieldError::new(field, "must be an integer")),
    }
}

fn check_positive_integer(body: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) {
    match body.get(field) {
        None | Some(Value::Null) => errors.push(FieldError::new(field, "is required")),
        Some(Value::Number(n)) if n.as_i64().is_some_and(|v| v > 0) => {}
        Some(_) => errors.push(FieldError::new(field, "must be a positive integer")),
    }
}

fn check_non_empty_string(body: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) {
    match body.get(field) {
        None | Some(Value::Null) => errors.push(FieldError::new(field, "is required")),
        Some(Value::String(s)) if !s.is_empty() => {}
        Some(Value::String(_)) => errors.push(FieldError::new(field, "must not be empty")),
        Some(_) => errors.push(FieldError::new(field, "must be a string")),
    }
}
