//! Filesystem operations used by the generators
//!
//! This is the only module that touches the target directory. Every function
//! completes before returning, so phases observe each other's writes in order.

use crate::error::{Result, ScaffoldError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Create a directory and all of its parents (no-op if present)
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| ScaffoldError::fs("create directory", path, e))
}

/// Write `content` to `path`, replacing any existing file.
///
/// The content lands in a sibling temp file first and is renamed over the
/// target, so readers never see a half-written file.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, content)
        .await
        .map_err(|e| ScaffoldError::fs("write", &tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(ScaffoldError::fs("write", path, e));
    }

    Ok(())
}

/// Read a UTF-8 file, failing with [`ScaffoldError::NotFound`] if it is absent
pub async fn read_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ScaffoldError::NotFound(path.into())),
        Err(e) => Err(ScaffoldError::fs("read", path, e)),
    }
}

/// Whether a file or directory exists at `path`
pub async fn file_exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// A directory that does not exist counts as empty
pub async fn is_directory_empty(path: &Path) -> bool {
    match fs::read_dir(path).await {
        Ok(mut entries) => matches!(entries.next_entry().await, Ok(None)),
        Err(_) => true,
    }
}

/// Mark a file as executable (git hooks). No-op outside Unix.
pub async fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .await
            .map_err(|e| ScaffoldError::fs("set permissions on", path, e))?;
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".nextcraft-tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parents_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/c.txt");

        write_file(&path, "first").await.unwrap();
        write_file(&path, "second").await.unwrap();

        assert_eq!(read_file(&path).await.unwrap(), "second");
        assert!(!file_exists(&tmp.path().join("a/b/c.txt.nextcraft-tmp")).await);
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = read_file(&tmp.path().join("missing.txt")).await;
        assert!(matches!(result, Err(ScaffoldError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_directory_emptiness() {
        let tmp = TempDir::new().unwrap();
        assert!(is_directory_empty(&tmp.path().join("nope")).await);
        assert!(is_directory_empty(tmp.path()).await);

        write_file(&tmp.path().join("file"), "x").await.unwrap();
        assert!(!is_directory_empty(tmp.path()).await);
    }

    #[tokio::test]
    async fn test_ensure_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("src/app");
        ensure_dir(&dir).await.unwrap();
        ensure_dir(&dir).await.unwrap();
        assert!(file_exists(&dir).await);
    }
}
