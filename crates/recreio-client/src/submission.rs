//! One user submit action, ready to be dispatched

use crate::endpoint::{Endpoint, Method};
use indexmap::IndexMap;
use recreio_form::SubmitButtonState;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Unique submission identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Ulid);

impl SubmissionId {
    /// Generate new submission ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submit action captured by the interceptor
///
/// Lives from the moment the submit is accepted until its outcome has been presented.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    /// Correlates log lines of one submission
    pub id: SubmissionId,
    /// Id of the originating form
    pub form: String,
    /// Target endpoint
    pub endpoint: Endpoint,
    /// Request body fields, in form order
    pub values: IndexMap<String, String>,
    /// Submit button state captured before dispatch
    pub submitter: SubmitButtonState,
}

impl FormSubmission {
    /// Create submission with no values
    #[must_use]
    pub fn new(form: impl Into<String>, endpoint: Endpoint, submitter: SubmitButtonState) -> Self {
        Self {
            id: SubmissionId::new(),
            form: form.into(),
            endpoint,
            values: IndexMap::new(),
            submitter,
        }
    }

    /// With an additional body field
    #[inline]
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// HTTP method of the target endpoint
    #[inline]
    #[must_use]
    pub fn method(&self) -> Method {
        self.endpoint.method
    }

    /// JSON request body, `None` when there are no values
    ///
    /// # Errors
    /// Returns the serializer error if encoding fails
    pub fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        if self.values.is_empty() {
            return Ok(None);
        }
        serde_json::to_vec(&self.values).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitter() -> SubmitButtonState {
        SubmitButtonState {
            disabled: false,
            label: "Entrar".to_string(),
        }
    }

    #[test]
    fn body_preserves_field_order() {
        let submission = FormSubmission::new("password-form", Endpoint::UPDATE_PASSWORD, submitter())
            .with_value("current_password", "Antiga123!")
            .with_value("new_password", "Nova1234!");

        let body = String::from_utf8(submission.body().unwrap().unwrap()).unwrap();
        assert_eq!(
            body,
            r#"{"current_password":"Antiga123!","new_password":"Nova1234!"}"#
        );
    }

    #[test]
    fn empty_submission_has_no_body() {
        let submission = FormSubmission::new("logout", Endpoint::LOGOUT, submitter());
        assert!(submission.body().unwrap().is_none());
        assert_eq!(submission.method(), Method::Post);
    }

    #[test]
    fn submission_ids_are_unique() {
        assert_ne!(SubmissionId::new(), SubmissionId::new());
    }
}
