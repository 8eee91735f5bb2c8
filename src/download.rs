// src/download.rs
use crate::error::ApiError;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOWNLOAD_NAME: &str = "tailored_resume.txt";

/// Save the tailored resume as a plain-text file, creating parent
/// directories as needed.
pub async fn save_plain_text(path: &Path, content: &str) -> Result<(), ApiError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ApiError::capability(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|e| ApiError::capability(format!("Failed to save {}: {}", path.display(), e)))
}

/// Timestamped filename so repeated downloads in the same directory do not
/// overwrite each other.
pub fn timestamped_download_path(dir: &Path) -> PathBuf {
    dir.join(format!(
        "tailored_resume_{}.txt",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ))
}
