//! Input validation errors.

/// A required user input was missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Missing required field: {}", field)]
pub struct ValidationError {
    /// Name of the missing field
    pub field: &'static str,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error for the named field.
    ///
    /// # Examples
    ///
    /// ```
    /// use weaver_error::ValidationError;
    ///
    /// let err = ValidationError::missing("credential");
    /// assert_eq!(err.to_string(), "Missing required field: credential");
    /// ```
    #[track_caller]
    pub fn missing(field: &'static str) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field,
            line: location.line(),
            file: location.file(),
        }
    }
}
