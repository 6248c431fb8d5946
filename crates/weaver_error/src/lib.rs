//! Error types for Story Weaver.
//!
//! This crate provides the foundation error types used throughout the workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use weaver_error::{ConfigError, WeaverResult};
//!
//! fn load_settings() -> WeaverResult<String> {
//!     Err(ConfigError::new("story.model must not be empty"))?
//! }
//!
//! assert!(load_settings().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod server;
mod storage;
mod validation;

pub use backend::{BackendError, BackendErrorKind};
pub use config::ConfigError;
pub use error::{WeaverError, WeaverErrorKind, WeaverResult};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::ValidationError;
