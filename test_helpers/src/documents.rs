//! Throwaway directories of fixture documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A temporary directory removed when dropped.
///
/// ```
/// use test_helpers::documents::DocumentDir;
///
/// # fn main() -> anyhow::Result<()> {
/// let dir = DocumentDir::new()?;
/// let path = dir.write("main.yaml", "name: Alex\n")?;
/// assert!(path.starts_with(dir.path()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DocumentDir {
    dir: TempDir,
}

impl DocumentDir {
    /// Create an empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary document directory")?;
        Ok(Self { dir })
    }

    /// Root of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the directory and return its path.
    ///
    /// Intermediate directories in `name` are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the file or its parents cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
