//! Error types for the web surface.

/// Error kinds for server operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Failed to bind the listening socket
    #[display("Failed to bind {}: {}", addr, message)]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying I/O error
        message: String,
    },

    /// The server loop exited with an error
    #[display("Server failed: {}", _0)]
    Serve(String),

    /// A page template failed to load or render
    #[display("Template error: {}", _0)]
    Template(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The error kind
    pub kind: ServerErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
