//! Filesystem media store - writes uploads into a web-servable directory.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;

use quill_core::ports::{MediaError, MediaStore};

/// Public URL prefix the uploads directory is served under.
pub const UPLOADS_PREFIX: &str = "/uploads";

/// Stores uploads as `<unix-millis>-<name>` under `root`.
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the uploads directory if it is missing.
    pub async fn ensure_root(&self) -> Result<(), MediaError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| MediaError::Io(e.to_string()))
    }
}

/// Keep only the final path component and replace anything outside
/// `[A-Za-z0-9._-]` with `_`.
fn sanitize_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.trim_start_matches('.') {
        "" => "upload".to_string(),
        rest => rest.to_string(),
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn store(&self, original_name: &str, bytes: Vec<u8>) -> Result<String, MediaError> {
        let file_name = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(original_name)
        );

        self.ensure_root().await?;
        tokio::fs::write(self.root.join(&file_name), &bytes)
            .await
            .map_err(|e| MediaError::Io(e.to_string()))?;

        tracing::debug!(file = %file_name, size = bytes.len(), "Stored upload");

        Ok(format!("{}/{}", UPLOADS_PREFIX, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_directories_and_odd_chars() {
        assert_eq!(sanitize_file_name("cover.png"), "cover.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\pics\\my cat.jpg"), "my_cat.jpg");
        assert_eq!(sanitize_file_name(".."), "upload");
        assert_eq!(sanitize_file_name(""), "upload");
    }

    #[tokio::test]
    async fn test_store_writes_timestamped_file() {
        let root = std::env::temp_dir().join(format!("quill-media-{}", uuid::Uuid::new_v4()));
        let store = LocalMediaStore::new(&root);

        let path = store.store("cover.png", b"png-bytes".to_vec()).await.unwrap();

        let file_name = path.strip_prefix("/uploads/").unwrap();
        let (stamp, name) = file_name.split_once('-').unwrap();
        assert!(stamp.parse::<i64>().is_ok());
        assert_eq!(name, "cover.png");
        assert_eq!(std::fs::read(root.join(file_name)).unwrap(), b"png-bytes");

        std::fs::remove_dir_all(&root).ok();
    }
}
