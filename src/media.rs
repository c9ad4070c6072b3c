use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;

use crate::models::media::MEDIA_DELIMITER;

/// Public subdirectory (relative to the site root) that project uploads land in.
pub const PROJECT_MEDIA_DIR: &str = "assets/projects";

#[derive(Debug)]
pub struct MediaError {
    pub message: String,
}

impl std::fmt::Display for MediaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for MediaError {
    fn from(s: String) -> Self {
        MediaError { message: s }
    }
}

/// File storage for uploaded project media, addressed by site-relative paths.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Writes `data` under the project media directory as `file_name` (already
    /// sanitized) and returns its relative path. An existing file of the same
    /// name is overwritten.
    async fn store(&self, file_name: &str, data: Bytes) -> Result<String, MediaError>;

    /// Deletes a stored file. `Ok(false)` when nothing exists at that path.
    async fn remove(&self, relative_path: &str) -> Result<bool, MediaError>;
}

/// Reduce a client-supplied file name to a bare base name safe for storage.
///
/// Directory components (either separator) are stripped and the list
/// delimiter is replaced so the name can't split a persisted media string.
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() || base == "." || base == ".." {
        return None;
    }

    Some(base.replace(MEDIA_DELIMITER, "_"))
}

pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a site-relative path, refusing anything that escapes the root.
    fn resolve(&self, relative_path: &str) -> Option<PathBuf> {
        let rel = Path::new(relative_path);
        if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.root.join(rel))
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn store(&self, file_name: &str, data: Bytes) -> Result<String, MediaError> {
        let dir = self.root.join(PROJECT_MEDIA_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;

        let relative = format!("{PROJECT_MEDIA_DIR}/{file_name}");
        let target = dir.join(file_name);
        tokio::fs::write(&target, &data)
            .await
            .map_err(|e| format!("Failed to write {relative}: {e}"))?;

        tracing::debug!(path = %relative, bytes = data.len(), "Stored media file");
        Ok(relative)
    }

    async fn remove(&self, relative_path: &str) -> Result<bool, MediaError> {
        let Some(path) = self.resolve(relative_path) else {
            return Err(format!("Refusing to remove path outside media root: {relative_path}").into());
        };

        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|e| format!("Failed to check {relative_path}: {e}"))?;
        if !exists {
            return Ok(false);
        }

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| format!("Failed to remove {relative_path}: {e}"))?;
        Ok(true)
    }
}
