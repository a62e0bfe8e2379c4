//! Error types for the request dispatcher
//!
//! Every variant of [`DispatchError`] is fatal to the submission that raised
//! it: callers log the detail and show a generic failure message.

/// Failures sending a request or reading its response
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP client failure (connect, TLS, timeout, body read)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL cannot be parsed or joined with an endpoint path
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Configured header value is not valid
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// Connection failure reported by a non-HTTP transport
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Failures that end a submission without a classified outcome
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Request could not be sent or the response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Request body could not be encoded
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body is not valid JSON
    #[error("failed to parse response body (status {status}): {source}")]
    Parse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Response body is JSON but lacks the fields its status requires
    #[error("response with status {status} violates the contract: {reason}")]
    Contract { status: u16, reason: &'static str },

    /// Status code outside the contract
    #[error("unexpected response status: {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// Read-only request refused by the server
    #[error("request refused with status {status}: {message}")]
    Refused { status: u16, message: String },
}

impl DispatchError {
    /// HTTP status involved, when a response was received
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Parse { status, .. }
            | Self::Contract { status, .. }
            | Self::UnexpectedStatus { status, .. }
            | Self::Refused { status, .. } => Some(*status),
            Self::Transport(_) | Self::Encode(_) => None,
        }
    }

    /// Whether the server answered with a status outside the contract
    #[inline]
    #[must_use]
    pub fn is_unexpected_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. })
    }

    /// Whether the request never produced a usable response
    #[inline]
    #[must_use]
    pub fn is_network_or_parse(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Encode(_) | Self::Parse { .. } | Self::Contract { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_error_display() {
        let err = DispatchError::UnexpectedStatus {
            status: 404,
            body: String::new(),
        };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.status(), Some(404));
        assert!(err.is_unexpected_status());
        assert!(!err.is_network_or_parse());
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = DispatchError::from(TransportError::Connection("refused".into()));
        assert_eq!(err.status(), None);
        assert!(err.is_network_or_parse());
    }
}
