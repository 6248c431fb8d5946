//! The fixed-path narration file.

use std::path::{Path, PathBuf};
use weaver_error::{StorageError, StorageErrorKind, WeaverResult};

/// Handle to the single narration MP3 on local storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationFile {
    path: PathBuf,
}

impl NarrationFile {
    /// Point at the narration path. Nothing is touched until [`write`](Self::write).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents with `audio`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if `audio` is empty or the file cannot be written.
    #[tracing::instrument(skip(self, audio), fields(path = %self.path.display(), size = audio.len()))]
    pub async fn write(&self, audio: &[u8]) -> WeaverResult<PathBuf> {
        if audio.is_empty() {
            return Err(StorageError::new(StorageErrorKind::Empty(format!(
                "no audio bytes for {}",
                self.path.display()
            )))
            .into());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        tokio::fs::write(&self.path, audio).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!("Wrote narration file");
        Ok(self.path.clone())
    }

    /// Read the current narration back.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no run has produced the file yet, or `FileRead`
    /// for any other I/O failure.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn read(&self) -> WeaverResult<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                StorageErrorKind::NotFound(self.path.display().to_string())
            } else {
                StorageErrorKind::FileRead(format!("{}: {}", self.path.display(), e))
            };
            StorageError::new(kind).into()
        })
    }
}
