//! Transport seam and its HTTP implementation

use crate::endpoint::{Endpoint, Method};
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One request to the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute path
    pub path: String,
    /// JSON body; sent with `Content-Type: application/json` when present
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Request without body
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            method: endpoint.method,
            path: endpoint.path.to_string(),
            body: None,
        }
    }

    /// With JSON body
    #[inline]
    #[must_use]
    pub fn with_body(mut self, body: Option<Vec<u8>>) -> Self {
        self.body = body;
        self
    }
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body bytes (possibly empty)
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Create response
    #[inline]
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as lossy UTF-8, for diagnostics
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns its response
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request`
    ///
    /// # Errors
    /// `TransportError` if no response could be obtained
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the API
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// `Cookie` header of an existing session
    pub cookie: Option<String>,
    /// `User-Agent` header
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for `base_url` with defaults otherwise
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// With session cookie
    #[inline]
    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: None,
            cookie: None,
            user_agent: format!("recreio/{}", crate::VERSION),
        }
    }
}

/// [`Transport`] over HTTP with a per-client cookie store
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a client from `config`
    ///
    /// # Errors
    /// - `TransportError::InvalidUrl` if the base URL does not parse
    /// - `TransportError::InvalidHeader` if the cookie is not a valid header value
    /// - `TransportError::Http` if the client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| TransportError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| TransportError::InvalidHeader(e.to_string()))?;
            headers.insert(COOKIE, value);
        }

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Base URL requests are resolved against
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path)?;
        let mut builder = self.client.request(request.method.into(), url);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(ApiResponse { status, body })
    }
}
