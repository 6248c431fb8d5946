//! AI Story Weaver
//!
//! Turns a one-line idea into a short story, one illustration per scene, and
//! an MP3 narration, served through a small web form.
//!
//! # Architecture
//!
//! Story Weaver is organized as a workspace with focused crates:
//!
//! - `weaver_error` - Error types
//! - `weaver_core` - Core data types, prompts and the scene splitter
//! - `weaver_interface` - Backend driver and status reporter traits
//! - `weaver_config` - Layered configuration
//! - `weaver_storage` - The narration file
//! - `weaver_models` - HuggingFace and Google Translate backends
//! - `weaver_pipeline` - Generators and the run orchestrator
//! - `weaver_server` - Web form, sessions and rendering
//!
//! This crate (`weaver`) re-exports everything for convenience.

pub use weaver_config::*;
pub use weaver_core::*;
pub use weaver_error::*;
pub use weaver_interface::*;
pub use weaver_models::*;
pub use weaver_pipeline::*;
pub use weaver_server::*;
pub use weaver_storage::*;

pub mod observability;
