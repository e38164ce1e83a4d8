//! Closed-set payload schemas
//!
//! Every write operation declares the exact attribute keys it accepts. A
//! payload is checked against that set structurally, before any typed
//! decoding and before the catalog is touched.

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON kind an attribute must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Integer => value.is_u64() || value.is_i64(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Integer => "an integer",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PayloadField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl PayloadField {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Accepted attribute set for one write operation
#[derive(Debug, Clone, Copy)]
pub struct PayloadSchema {
    pub operation: &'static str,
    pub fields: &'static [PayloadField],
    /// Whether `{}` is an acceptable payload
    pub allow_empty: bool,
}

impl PayloadSchema {
    fn field(&self, name: &str) -> Option<&PayloadField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn allowed_keys(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check the key set and value kinds of `payload`.
    pub fn check<'a>(&self, payload: &'a Value) -> Result<&'a Map<String, Value>> {
        let object = payload.as_object().ok_or_else(|| {
            AppError::Validation(format!(
                "Request body for {} must be a JSON object",
                self.operation
            ))
        })?;

        let unknown: Vec<&str> = object
            .keys()
            .map(String::as_str)
            .filter(|key| self.field(key).is_none())
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::Validation(format!(
                "Unexpected attribute(s) for {}: {}. Allowed attributes: {}",
                self.operation,
                unknown.join(", "),
                self.allowed_keys()
            )));
        }

        let missing: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required && !object.contains_key(f.name))
            .map(|f| f.name)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required attribute(s) for {}: {}",
                self.operation,
                missing.join(", ")
            )));
        }

        if object.is_empty() && !self.allow_empty {
            return Err(AppError::Validation(format!(
                "Request body for {} must contain at least one of: {}",
                self.operation,
                self.allowed_keys()
            )));
        }

        for (key, value) in object {
            // Unknown keys were rejected above
            if let Some(field) = self.field(key) {
                if !field.kind.matches(value) {
                    return Err(AppError::Validation(format!(
                        "Attribute '{}' must be {}",
                        key,
                        field.kind.describe()
                    )));
                }
            }
        }

        Ok(object)
    }
}

/// Decode a raw request body against `schema` into a typed input.
///
/// Only the payload's shape is checked here; value rules (`Validate`) run
/// in the service layer.
pub fn parse_payload<T>(schema: &PayloadSchema, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(format!(
            "Request body for {} is required",
            schema.operation
        )));
    }

    decode(schema, body).inspect_err(|e| {
        tracing::debug!(operation = schema.operation, error = %e, "Payload rejected");
    })
}

fn decode<T: DeserializeOwned>(schema: &PayloadSchema, body: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(body)?;
    schema.check(&value)?;

    Ok(serde_json::from_value(value)?)
}
