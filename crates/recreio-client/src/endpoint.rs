//! Account API endpoints

use std::fmt;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Upper-case method name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Method and path of one API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// HTTP method
    pub method: Method,
    /// Absolute path below the API host
    pub path: &'static str,
}

impl Endpoint {
    /// Create account
    pub const REGISTER: Self = Self::new(Method::Post, "/api/auth/register");
    /// Open a session
    pub const LOGIN: Self = Self::new(Method::Post, "/api/auth/login");
    /// Close the session
    pub const LOGOUT: Self = Self::new(Method::Post, "/api/auth/logout");
    /// Whether the caller holds a session
    pub const AUTH_STATUS: Self = Self::new(Method::Get, "/api/auth/status");
    /// Current account details
    pub const MY_ACCOUNT: Self = Self::new(Method::Get, "/api/my-account");
    /// Rename the account
    pub const UPDATE_NAME: Self = Self::new(Method::Put, "/api/my-account/name");
    /// Change the account e-mail
    pub const UPDATE_EMAIL: Self = Self::new(Method::Put, "/api/my-account/email");
    /// Change the account password
    pub const UPDATE_PASSWORD: Self = Self::new(Method::Put, "/api/my-account/password");
    /// Delete the account
    pub const DELETE_ACCOUNT: Self = Self::new(Method::Delete, "/api/my-account");

    /// Create endpoint
    #[inline]
    #[must_use]
    pub const fn new(method: Method, path: &'static str) -> Self {
        Self { method, path }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
