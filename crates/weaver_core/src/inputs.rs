//! The three user-supplied form inputs.

use crate::Credential;
use serde::Deserialize;
use weaver_error::ValidationError;

/// Inputs collected from the form for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StoryInputs {
    /// Bearer token for the hosted backends
    #[serde(default)]
    pub credential: Credential,
    /// Short story idea
    #[serde(default)]
    pub idea: String,
    /// Character and style description blended into every illustration
    #[serde(default)]
    pub character: String,
}

impl StoryInputs {
    /// Create inputs from raw strings.
    pub fn new(
        credential: impl Into<String>,
        idea: impl Into<String>,
        character: impl Into<String>,
    ) -> Self {
        Self {
            credential: Credential::new(credential),
            idea: idea.into(),
            character: character.into(),
        }
    }

    /// Check that every required field is present.
    ///
    /// Fields are checked in form order: credential, idea, character.
    ///
    /// # Errors
    ///
    /// Returns the first blank field as a [`ValidationError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weaver_core::StoryInputs;
    ///
    /// let inputs = StoryInputs::new("", "A robot in a forest.", "A chrome robot.");
    /// assert_eq!(inputs.validate().unwrap_err().field, "credential");
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credential.is_blank() {
            return Err(ValidationError::missing("credential"));
        }
        if self.idea.trim().is_empty() {
            return Err(ValidationError::missing("idea"));
        }
        if self.character.trim().is_empty() {
            return Err(ValidationError::missing("character"));
        }
        Ok(())
    }
}
