//! Recreio Client - request dispatcher for the account API
//!
//! Serializes form submissions to JSON, sends them through a [`Transport`] and
//! classifies the response by status code:
//! - 2xx: success, body optional
//! - 400: field validation errors (`{"errors": {field: [msg, ...]}}`)
//! - 401 / 409: domain conflict (`{"message": "..."}`)
//! - 500: server failure (`{"message": "..."}`)
//! - anything else: unexpected, surfaced as [`DispatchError::UnexpectedStatus`]
//!
//! # Example
//!
//! ```rust,ignore
//! use recreio_client::{ClientConfig, Dispatcher, Endpoint, FormSubmission, HttpTransport};
//! use std::sync::Arc;
//!
//! # async fn example(submitter: recreio_form::SubmitButtonState) -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new(&ClientConfig::new("http://localhost:5000"))?;
//! let dispatcher = Dispatcher::new(Arc::new(transport));
//!
//! let submission = FormSubmission::new("login-form", Endpoint::LOGIN, submitter)
//!     .with_value("email", "ana@example.com")
//!     .with_value("password", "Senha123!");
//! let outcome = dispatcher.dispatch(&submission).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod dispatcher;
pub mod endpoint;
pub mod error;
pub mod submission;
pub mod transport;
pub mod wire;

pub use dispatcher::{classify, Dispatcher, Outcome};
pub use endpoint::{Endpoint, Method};
pub use error::{DispatchError, TransportError};
pub use submission::{FormSubmission, SubmissionId};
pub use transport::{ApiRequest, ApiResponse, ClientConfig, HttpTransport, Transport};
pub use wire::{Account, ApiErrorResponse, AuthStatus, FieldErrors, SuccessEnvelope};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
