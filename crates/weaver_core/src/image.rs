//! Generated illustration bytes.

/// One raster image returned by the illustration backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// MIME type reported by the backend (e.g. "image/jpeg")
    pub mime: String,
    /// Encoded image bytes
    pub data: Vec<u8>,
}

impl Image {
    /// Create an image from its MIME type and bytes.
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }
}
