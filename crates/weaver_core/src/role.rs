//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Chat participant roles.
///
/// # Examples
///
/// ```
/// use weaver_core::Role;
///
/// assert_eq!(Role::System.as_str(), "system");
/// assert_eq!(format!("{}", Role::User), "User");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the model
    Assistant,
}

impl Role {
    /// Lowercase wire name used by chat-completion APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
