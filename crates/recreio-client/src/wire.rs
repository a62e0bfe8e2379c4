//! Response bodies of the account API
//!
//! Success: `{"message": "...", "data": ...}` (body optional for submissions)
//! Error: `{"message": "...", "errors": {field: [msg, ...]}}`

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Validation messages per field, in the order the server sent them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    /// Create empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append messages for `field`
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, messages: &[&str]) -> Self {
        self.0
            .entry(field.into())
            .or_default()
            .extend(messages.iter().map(|m| (*m).to_string()));
        self
    }

    /// Messages for `field`
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Fields with their messages
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field has errors
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parsed body of a non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorResponse {
    /// HTTP status (not part of the body)
    #[serde(skip)]
    pub status: u16,
    /// Human-readable message (401, 409, 500)
    #[serde(default)]
    pub message: Option<String>,
    /// Field validation errors (400)
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

impl ApiErrorResponse {
    /// Parse `body` received with `status`
    ///
    /// # Errors
    /// Returns the JSON error if the body is not a JSON object of the expected shape
    pub fn parse(status: u16, body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut parsed: Self = serde_json::from_slice(body)?;
        parsed.status = status;
        Ok(parsed)
    }
}

/// Body of a 2xx response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuccessEnvelope<T> {
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Payload of read-only calls
    pub data: Option<T>,
}

/// Payload of `GET /api/auth/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether the caller holds a valid session
    pub authenticated: bool,
}

/// Payload of `GET /api/my-account`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name
    pub name: String,
    /// Login e-mail
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_keep_server_order() {
        let body = br#"{"errors": {"password": ["a"], "email": ["b", "c"], "name": ["d"]}}"#;
        let parsed = ApiErrorResponse::parse(400, body).unwrap();
        let errors = parsed.errors.unwrap();
        let fields: Vec<&str> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["password", "email", "name"]);
        assert_eq!(errors.get("email").unwrap().len(), 2);
        assert_eq!(parsed.status, 400);
    }

    #[test]
    fn error_response_fields_are_optional() {
        let parsed = ApiErrorResponse::parse(409, r#"{"message": "Email já está em uso."}"#.as_bytes()).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("Email já está em uso."));
        assert!(parsed.errors.is_none());
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(ApiErrorResponse::parse(500, b"<html>").is_err());
    }

    #[test]
    fn success_envelope_with_data() {
        let body = br#"{"message": "ok", "data": {"authenticated": true}}"#;
        let parsed: SuccessEnvelope<AuthStatus> = serde_json::from_slice(body).unwrap();
        assert_eq!(parsed.data, Some(AuthStatus { authenticated: true }));
    }
}
