//! Local storage for the narration track.
//!
//! Exactly one artifact is persisted: an MP3 file at a fixed path that every
//! run overwrites. There is no versioning and no per-session naming, so
//! concurrent sessions sharing a filesystem overwrite each other's narration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod narration;

pub use narration::NarrationFile;
