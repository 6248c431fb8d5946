//! Message types for the story prompt exchange.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat exchange.
///
/// # Examples
///
/// ```
/// use weaver_core::{Message, Role};
///
/// let message = Message::system("Be vivid.");
/// assert_eq!(message.role, Role::System);
/// assert_eq!(message.content, "Be vivid.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The message text
    pub content: String,
}

impl Message {
    /// Create a message with the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
