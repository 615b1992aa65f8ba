use crate::core::Storage;
use crate::utils::error::{Result, StripError};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Filesystem storage. Saves go through a temp file renamed over the target,
/// so an interrupted write never leaves a truncated file behind.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn load(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StripError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => StripError::IoError(e),
        })?;

        String::from_utf8(bytes).map_err(|source| StripError::DecodeError {
            path: path.display().to_string(),
            source,
        })
    }

    fn save(&self, path: &Path, contents: &str) -> Result<()> {
        // Rename onto the link's target, not the link itself.
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let path = target.as_path();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(tmp.path(), metadata.permissions())?;
        }

        tmp.persist(path).map_err(|e| StripError::IoError(e.error))?;
        tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}
