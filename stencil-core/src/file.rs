use std::path::{Path, PathBuf};

use crate::{Result, Storage};

/// Trait for types that represent a generated file.
///
/// Content is rendered fully in memory before anything is written, so a
/// failure never leaves a half-written file behind.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file through the given storage
    fn write(&self, storage: &dyn Storage, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        if self.rules().overwrite == Overwrite::IfMissing && storage.exists(&path) {
            tracing::debug!(path = %path.display(), "file exists, skipping");
            return Ok(WriteResult::Skipped);
        }

        let content = self.render();
        storage.write(&path, &content)?;
        tracing::info!(path = %path.display(), "generated");
        Ok(WriteResult::Written)
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files users are expected to edit after creation.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (stylesheets, stubs)
    IfMissing,
}
