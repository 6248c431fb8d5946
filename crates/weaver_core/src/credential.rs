//! Bearer credential for the hosted backends.

use serde::Deserialize;

/// An opaque bearer token supplied by the user.
///
/// The token is never printed: `Debug` redacts it, and there is no `Display`.
///
/// # Examples
///
/// ```
/// use weaver_core::Credential;
///
/// let token = Credential::new("hf_secret");
/// assert_eq!(token.expose(), "hf_secret");
/// assert!(!format!("{:?}", token).contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the token is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
