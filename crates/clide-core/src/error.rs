//! Error types for editor sessions, each wrapping its originating cause

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Why an editor invocation did not succeed.
#[derive(Debug, Error)]
pub enum LaunchFailure {
    /// The process could not be started at all
    #[error("failed to start: {0}")]
    Spawn(#[source] std::io::Error),

    /// The process ran but exited non-zero or was killed by a signal
    #[error("exited with {0}")]
    Exit(ExitStatus),
}

/// Session error types, one per failing step
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Resolution Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No default editor for unrecognized operating system: {platform}")]
    UnsupportedPlatform { platform: String },

    // ─────────────────────────────────────────────────────────────
    // File Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create temporary file in {dir}: {source}")]
    TempFileCreation {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open file \"{path}\": {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to seek to beginning of file: {0}")]
    Seek(#[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to close file: {0}")]
    Close(#[source] std::io::Error),

    #[error("Failed to remove file \"{path}\": {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Edited content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    // ─────────────────────────────────────────────────────────────
    // Process Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Editor \"{editor}\" {failure}")]
    EditorExecution {
        editor: String,
        #[source]
        failure: LaunchFailure,
    },

    // ─────────────────────────────────────────────────────────────
    // Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unsupported_platform(platform: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            platform: platform.into(),
        }
    }

    pub fn temp_file_creation(dir: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TempFileCreation {
            dir: dir.into(),
            source,
        }
    }

    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn remove(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Remove {
            path: path.into(),
            source,
        }
    }

    pub fn spawn_failed(editor: impl Into<String>, source: std::io::Error) -> Self {
        Self::EditorExecution {
            editor: editor.into(),
            failure: LaunchFailure::Spawn(source),
        }
    }

    pub fn exit_failed(editor: impl Into<String>, status: ExitStatus) -> Self {
        Self::EditorExecution {
            editor: editor.into(),
            failure: LaunchFailure::Exit(status),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if the editor process was the failing step
    pub fn is_editor_failure(&self) -> bool {
        matches!(self, Error::EditorExecution { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with context and pass it through
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unsupported_platform("plan9");
        assert_eq!(
            err.to_string(),
            "No default editor for unrecognized operating system: plan9"
        );

        let err = Error::file_open("/tmp/notes.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("\"/tmp/notes.txt\""));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_wrapped_cause_is_preserved() {
        let err = Error::Seek(io::Error::new(io::ErrorKind::Other, "bad fd"));
        let source = err.source().expect("seek error has a source");
        assert_eq!(source.to_string(), "bad fd");

        let err = Error::remove("/tmp/x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_spawn_failure_chain() {
        let err = Error::spawn_failed(
            "no-such-editor",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.is_editor_failure());
        assert!(err.to_string().contains("no-such-editor"));

        let failure = err.source().expect("launch failure");
        assert!(failure.to_string().starts_with("failed to start"));
        assert_eq!(failure.source().map(|e| e.to_string()), Some("not found".into()));
    }

    #[test]
    fn test_non_editor_errors() {
        assert!(!Error::config("bad key").is_editor_failure());
        assert!(!Error::Close(io::Error::from(io::ErrorKind::Other)).is_editor_failure());
    }

    #[test]
    fn test_context_passes_error_through() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::Other, "boom"));
        let err = result.context("reading scratch file").unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let result: std::result::Result<(), Error> = Err(Error::config("x"));
        let err = result
            .with_context(|| "loading options".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
