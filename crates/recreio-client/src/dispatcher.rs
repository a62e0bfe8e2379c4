//! Request dispatcher
//!
//! Sends a [`FormSubmission`] and classifies the response into an [`Outcome`].
//! Statuses outside the contract, unreadable bodies and transport failures
//! come back as [`DispatchError`].

use crate::endpoint::Endpoint;
use crate::error::DispatchError;
use crate::submission::FormSubmission;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use crate::wire::{ApiErrorResponse, FieldErrors, SuccessEnvelope};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

/// Status codes with a meaning in the response contract
pub mod status {
    /// Field validation errors
    pub const BAD_REQUEST: u16 = 400;
    /// Wrong credentials or missing session
    pub const UNAUTHORIZED: u16 = 401;
    /// Resource already exists (e.g. e-mail in use)
    pub const CONFLICT: u16 = 409;
    /// Server-side failure
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Classified result of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx
    Success {
        /// Exact status
        status: u16,
        /// Server message, if the body carried one
        message: Option<String>,
    },
    /// 400 with per-field messages
    ValidationFailure(FieldErrors),
    /// 401 or 409 with a single message
    DomainConflict {
        /// 401 or 409
        status: u16,
        /// Server message
        message: String,
    },
    /// 500 with a single message
    ServerFailure {
        /// Server message
        message: String,
    },
}

impl Outcome {
    /// Whether the request succeeded
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[derive(Deserialize)]
struct SuccessMessage {
    #[serde(default)]
    message: Option<String>,
}

/// Classify a response by status code
///
/// 2xx bodies are optional; error bodies must be JSON carrying the field their
/// status requires (`errors` for 400, `message` for 401/409/500).
///
/// # Errors
/// - `DispatchError::UnexpectedStatus` for any status outside the contract
/// - `DispatchError::Parse` if an error body is not JSON
/// - `DispatchError::Contract` if an error body lacks its required field
pub fn classify(response: &ApiResponse) -> Result<Outcome, DispatchError> {
    let status = response.status;

    if response.is_success() {
        let message = serde_json::from_slice::<SuccessMessage>(&response.body)
            .ok()
            .and_then(|body| body.message);
        return Ok(Outcome::Success { status, message });
    }

    if !matches!(
        status,
        status::BAD_REQUEST | status::UNAUTHORIZED | status::CONFLICT | status::INTERNAL_SERVER_ERROR
    ) {
        return Err(DispatchError::UnexpectedStatus {
            status,
            body: response.body_text(),
        });
    }

    let body = ApiErrorResponse::parse(status, &response.body)
        .map_err(|source| DispatchError::Parse { status, source })?;

    match status {
        status::BAD_REQUEST => body
            .errors
            .map(Outcome::ValidationFailure)
            .ok_or(DispatchError::Contract {
                status,
                reason: "missing 'errors' mapping",
            }),
        status::INTERNAL_SERVER_ERROR => body
            .message
            .map(|message| Outcome::ServerFailure { message })
            .ok_or(DispatchError::Contract {
                status,
                reason: "missing 'message'",
            }),
        _ => body
            .message
            .map(|message| Outcome::DomainConflict { status, message })
            .ok_or(DispatchError::Contract {
                status,
                reason: "missing 'message'",
            }),
    }
}

/// Issues requests through a shared [`Transport`]
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create dispatcher over `transport`
    #[inline]
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send `submission` and classify the response
    ///
    /// # Errors
    /// See [`classify`]; also `DispatchError::Encode` and `DispatchError::Transport`
    pub async fn dispatch(&self, submission: &FormSubmission) -> Result<Outcome, DispatchError> {
        let body = submission.body().map_err(DispatchError::Encode)?;
        let request = ApiRequest::new(submission.endpoint).with_body(body);

        tracing::info!(
            submission = %submission.id,
            form = %submission.form,
            endpoint = %submission.endpoint,
            "Dispatching submission"
        );

        let response = self.transport.send(request).await?;
        tracing::debug!(submission = %submission.id, status = response.status, "Received response");

        classify(&response)
    }

    /// Issue a read-only request and unwrap the `data` of its success envelope
    ///
    /// # Errors
    /// - `DispatchError::Refused` if the server answered 401, 409 or 500
    /// - `DispatchError::Contract` if a 2xx body has no `data`
    /// - everything [`classify`] returns
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, DispatchError> {
        tracing::debug!(endpoint = %endpoint, "Fetching");
        let response = self.transport.send(ApiRequest::new(endpoint)).await?;

        match classify(&response)? {
            Outcome::Success { status, .. } => {
                let envelope: SuccessEnvelope<T> = serde_json::from_slice(&response.body)
                    .map_err(|source| DispatchError::Parse { status, source })?;
                envelope.data.ok_or(DispatchError::Contract {
                    status,
                    reason: "missing 'data'",
                })
            }
            Outcome::DomainConflict { status, message } => {
                Err(DispatchError::Refused { status, message })
            }
            Outcome::ServerFailure { message } => Err(DispatchError::Refused {
                status: status::INTERNAL_SERVER_ERROR,
                message,
            }),
            Outcome::ValidationFailure(_) => Err(DispatchError::Contract {
                status: status::BAD_REQUEST,
                reason: "validation errors on a read-only request",
            }),
        }
    }
}
