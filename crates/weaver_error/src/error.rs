//! Top-level error wrapper types.

use crate::{BackendError, ConfigError, ServerError, StorageError, ValidationError};

/// Every error condition known to the workspace.
///
/// # Examples
///
/// ```
/// use weaver_error::{ValidationError, WeaverError};
///
/// let err: WeaverError = ValidationError::missing("idea").into();
/// assert!(format!("{}", err).contains("Missing required field"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WeaverErrorKind {
    /// Hosted backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Local storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Missing user input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Web surface error
    #[from(ServerError)]
    Server(ServerError),
}

/// Story Weaver error with kind discrimination.
///
/// # Examples
///
/// ```
/// use weaver_error::{ConfigError, WeaverErrorKind, WeaverResult};
///
/// fn might_fail() -> WeaverResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), WeaverErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("{}", _0)]
pub struct WeaverError(Box<WeaverErrorKind>);

impl WeaverError {
    /// Create a new error from a kind.
    pub fn new(kind: WeaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WeaverErrorKind {
        &self.0
    }

    /// The error as shown to a user, without source locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use weaver_error::{BackendError, BackendErrorKind, WeaverError};
    ///
    /// let err: WeaverError =
    ///     BackendError::new("huggingface", BackendErrorKind::from_status(401, "Invalid token")).into();
    /// assert_eq!(
    ///     err.user_message(),
    ///     "huggingface backend: Authentication failed (401): Invalid token"
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            WeaverErrorKind::Backend(e) => format!("{} backend: {}", e.provider, e.kind),
            WeaverErrorKind::Config(e) => e.message.clone(),
            WeaverErrorKind::Storage(e) => e.kind.to_string(),
            WeaverErrorKind::Validation(e) => e.to_string(),
            WeaverErrorKind::Server(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to WeaverErrorKind
impl<T> From<T> for WeaverError
where
    T: Into<WeaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Story Weaver operations.
pub type WeaverResult<T> = std::result::Result<T, WeaverError>;
