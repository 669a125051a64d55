//! Editor resolution: environment preference first, then a per-platform default.

use crate::env::{EnvProvider, EDITOR_VAR};
use clide_core::prelude::*;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Platform Identity
// ─────────────────────────────────────────────────────────────────────────────

/// Operating system the default editor is chosen for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    /// Any platform without a known default editor
    Other(String),
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identity string (as in `std::env::consts::OS`) to a platform.
    ///
    /// `darwin` is accepted as an alias for macOS.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::MacOs,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Fixed default editor path, if this platform has one.
    pub fn default_editor(&self) -> Option<&'static str> {
        DEFAULT_EDITORS
            .iter()
            .find(|entry| &entry.platform == self)
            .map(|entry| entry.path)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("windows"),
            Platform::Linux => f.write_str("linux"),
            Platform::MacOs => f.write_str("macos"),
            Platform::Other(name) => f.write_str(name),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Default Editors
// ─────────────────────────────────────────────────────────────────────────────

/// Default editor location for a recognized platform.
#[derive(Debug, Clone)]
pub struct DefaultEditor {
    pub platform: Platform,
    pub path: &'static str,
}

/// Fallback editors used when no preference is set.
pub const DEFAULT_EDITORS: &[DefaultEditor] = &[
    DefaultEditor {
        platform: Platform::Windows,
        path: "C:\\WINDOWS\\system32\\notepad.exe",
    },
    DefaultEditor {
        platform: Platform::Linux,
        path: "/usr/bin/vi",
    },
    DefaultEditor {
        platform: Platform::MacOs,
        path: "/usr/bin/vi",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve the editor command to launch.
///
/// Priority order:
/// 1. `$EDITOR` (an empty value counts as unset)
/// 2. The fixed default for `platform`
///
/// Fails with [`Error::UnsupportedPlatform`] when neither applies.
pub fn resolve_editor(env: &dyn EnvProvider, platform: &Platform) -> Result<String> {
    if let Some(editor) = env.non_empty_var(EDITOR_VAR) {
        debug!("Using editor from ${}: {}", EDITOR_VAR, editor);
        return Ok(editor);
    }

    match platform.default_editor() {
        Some(path) => {
            debug!("No ${} set, using {} default: {}", EDITOR_VAR, platform, path);
            Ok(path.to_string())
        }
        None => Err(Error::unsupported_platform(platform.to_string())),
    }
}

/// Resolve the editor from the real environment for the current platform.
pub fn default_editor() -> Result<String> {
    resolve_editor(&crate::env::SystemEnv, &Platform::current())
}
