//! Hosted backend errors.

/// Error conditions reported by a hosted inference or speech backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendErrorKind {
    /// The request never produced a response
    #[display("Request failed: {}", _0)]
    Request(String),

    /// The backend rejected the credential (HTTP 401/403)
    #[display("Authentication failed ({}): {}", status, message)]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The backend is throttling or the quota is exhausted (HTTP 429)
    #[display("Rate limit or quota exceeded: {}", _0)]
    RateLimited(String),

    /// Any other non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The response arrived but could not be interpreted
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),

    /// The response was well-formed but held no usable content
    #[display("Empty response: {}", _0)]
    EmptyResponse(String),

    /// A request could not be assembled
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

impl BackendErrorKind {
    /// Classify a non-success HTTP status into an error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use weaver_error::BackendErrorKind;
    ///
    /// let kind = BackendErrorKind::from_status(429, "slow down");
    /// assert!(matches!(kind, BackendErrorKind::RateLimited(_)));
    /// ```
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Unauthorized { status, message },
            429 => Self::RateLimited(message),
            _ => Self::Api { status, message },
        }
    }
}

/// Backend error with provider name and location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("{} backend: {} at line {} in {}", provider, kind, line, file)]
pub struct BackendError {
    /// Provider that produced the error (e.g. "huggingface")
    pub provider: &'static str,
    /// The specific error kind
    pub kind: BackendErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new backend error.
    #[track_caller]
    pub fn new(provider: &'static str, kind: BackendErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            provider,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
