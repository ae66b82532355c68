//! Media store port - where uploaded post images end up.

use async_trait::async_trait;

/// Stores uploaded bytes and hands back the public path they are served at.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist an upload under a collision-free name derived from
    /// `original_name`.
    async fn store(&self, original_name: &str, bytes: Vec<u8>) -> Result<String, MediaError>;
}

/// Media store errors.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Failed to write upload: {0}")]
    Io(String),
}
