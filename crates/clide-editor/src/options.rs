//! Session options, optionally loaded from a TOML file.
//!
//! Example file:
//! ```toml
//! editor = "nvim"
//! file_path = "notes/today.md"
//! scratch_dir = "/var/tmp"
//! ```

use clide_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options consumed by [`EditorSession::open`](crate::EditorSession::open).
///
/// Empty strings mean "unset": an empty `editor` is resolved from the
/// environment, an empty `file_path` creates a temporary file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Editor command or path. If empty, resolved from `$EDITOR` or the
    /// platform default.
    pub editor: String,

    /// File to edit. If empty, a temporary file is created.
    pub file_path: String,

    /// Directory for temporary files. Defaults to the OS temp dir.
    pub scratch_dir: Option<PathBuf>,
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = editor.into();
        self
    }

    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    /// Explicit editor command, if one was given.
    pub fn editor(&self) -> Option<&str> {
        Some(self.editor.as_str()).filter(|s| !s.is_empty())
    }

    /// Explicit target file, if one was given.
    pub fn file_path(&self) -> Option<&Path> {
        Some(self.file_path.as_str())
            .filter(|s| !s.is_empty())
            .map(Path::new)
    }

    /// Directory temporary files are created in.
    pub fn scratch_dir(&self) -> PathBuf {
        match &self.scratch_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => std::env::temp_dir(),
        }
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid options: {}", e)))
    }

    /// Load options from a TOML file.
    ///
    /// Returns default options if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No options file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let options = Self::from_toml_str(&content)?;
        debug!("Loaded editor options from {:?}", path);
        Ok(options)
    }
}
