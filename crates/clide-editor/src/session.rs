//! Editor sessions: open a target file, hand it to the user's editor, read it back.
//!
//! A session owns exactly one file handle. The editor runs as a blocking child
//! process that inherits the terminal, so terminal editors work as expected.
//! [`EditorSession::close`] consumes the session, which makes running or
//! reading after close impossible.

use crate::env::{EnvProvider, SystemEnv};
use crate::options::EditorOptions;
use crate::resolver::{resolve_editor, Platform};
use clide_core::prelude::*;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Name prefix for temporary files created by a session.
pub const TEMP_FILE_PREFIX: &str = "clide";

/// Where the target file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrigin {
    /// Created by the session in the scratch directory
    Temporary,
    /// Supplied by the caller
    Supplied,
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// One edit of one file.
#[derive(Debug)]
pub struct EditorSession {
    editor: String,
    path: PathBuf,
    file: File,
    origin: FileOrigin,
}

impl EditorSession {
    /// Open a session using the process environment and the current platform.
    pub fn open(options: EditorOptions) -> Result<Self> {
        Self::open_with(options, &SystemEnv, &Platform::current())
    }

    /// Open a session, resolving the editor through `env` and `platform`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedPlatform`] if no editor was given and none can be resolved
    /// - [`Error::TempFileCreation`] if the scratch file cannot be created
    /// - [`Error::FileOpen`] if the supplied file cannot be opened for read/write
    pub fn open_with(
        options: EditorOptions,
        env: &dyn EnvProvider,
        platform: &Platform,
    ) -> Result<Self> {
        let editor = match options.editor() {
            Some(editor) => editor.to_string(),
            None => resolve_editor(env, platform)?,
        };

        let (file, path, origin) = match options.file_path() {
            Some(path) => {
                let file = open_existing(path)?;
                (file, path.to_path_buf(), FileOrigin::Supplied)
            }
            None => {
                let (file, path) = create_temp_file(&options.scratch_dir())?;
                (file, path, FileOrigin::Temporary)
            }
        };

        debug!("Opened {:?} ({:?}) for editor {}", path, origin, editor);

        Ok(Self {
            editor,
            path,
            file,
            origin,
        })
    }

    /// Editor command this session launches.
    pub fn editor(&self) -> &str {
        &self.editor
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> FileOrigin {
        self.origin
    }

    pub fn is_temporary(&self) -> bool {
        self.origin == FileOrigin::Temporary
    }

    /// Run the editor on the target file and wait for it to exit.
    ///
    /// Blocks the calling thread for the lifetime of the editor process. On
    /// failure the session stays open, so the file can still be read.
    pub fn run(&self) -> Result<()> {
        launch(&self.editor, &self.path)
    }

    /// Run the editor on tokio's blocking pool and resolve once it exits.
    ///
    /// Only the editor command and path move into the blocking task; the file
    /// handle stays with the session.
    pub async fn run_async(&self) -> Result<()> {
        let editor = self.editor.clone();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || launch(&editor, &path))
            .await
            .map_err(|e| {
                Error::spawn_failed(
                    self.editor.as_str(),
                    io::Error::new(io::ErrorKind::Other, e.to_string()),
                )
            })?
    }

    /// Read the full content of the target file from the start.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        file.seek(SeekFrom::Start(0)).map_err(Error::Seek)?;

        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(Error::Read)?;
        Ok(content)
    }

    /// Replace the content of the target file, e.g. to seed a temporary file
    /// before launching the editor.
    pub fn write_all(&self, content: &[u8]) -> Result<()> {
        let mut file = &self.file;
        file.set_len(0).map_err(Error::Write)?;
        file.seek(SeekFrom::Start(0)).map_err(Error::Write)?;
        file.write_all(content).map_err(Error::Write)?;
        file.flush().map_err(Error::Write)
    }

    /// Close the file handle and delete the target file.
    ///
    /// The file is deleted even when the caller supplied it rather than the
    /// session creating it. If the handle fails to close, nothing is removed.
    pub fn close(self) -> Result<()> {
        let EditorSession {
            path, file, origin, ..
        } = self;

        flush_to_disk(&file).map_err(Error::Close)?;
        drop(file);

        if origin == FileOrigin::Supplied {
            warn!("Removing caller-supplied file {:?} on session close", path);
        }

        std::fs::remove_file(&path).map_err(|e| Error::remove(&path, e))?;
        info!("Closed editor session for {:?}", path);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot Editing
// ─────────────────────────────────────────────────────────────────────────────

/// Edit `seed` in a temporary file and return what the editor left behind.
///
/// Uses the process environment and the current platform to resolve the
/// editor. See [`edit_bytes_with`].
pub fn edit_bytes(options: EditorOptions, seed: &[u8]) -> Result<Vec<u8>> {
    edit_bytes_with(options, &SystemEnv, &Platform::current(), seed)
}

/// Edit `seed` in a temporary file, resolving the editor through `env` and
/// `platform`.
///
/// Any `file_path` in `options` is ignored so a caller's file is never
/// overwritten with the seed. The temporary file is removed before returning,
/// also when the editor fails.
pub fn edit_bytes_with(
    options: EditorOptions,
    env: &dyn EnvProvider,
    platform: &Platform,
    seed: &[u8],
) -> Result<Vec<u8>> {
    if options.file_path().is_some() {
        debug!("Ignoring file_path {:?} for one-shot edit", options.file_path);
    }
    let options = EditorOptions {
        file_path: String::new(),
        ..options
    };
    let session = EditorSession::open_with(options, env, platform)?;

    let edited = session
        .write_all(seed)
        .and_then(|()| session.run())
        .and_then(|()| session.read_all());

    match edited {
        Ok(content) => {
            session.close()?;
            Ok(content)
        }
        Err(err) => {
            // The editor error wins over a cleanup failure
            let _ = session
                .close()
                .context("Failed to clean up after editor error");
            Err(err)
        }
    }
}

/// Like [`edit_bytes`], for UTF-8 text.
pub fn edit_string(options: EditorOptions, seed: &str) -> Result<String> {
    let content = edit_bytes(options, seed.as_bytes())?;
    Ok(String::from_utf8(content)?)
}

// ─────────────────────────────────────────────────────────────────────────────
// File Setup
// ─────────────────────────────────────────────────────────────────────────────

/// Push buffered writes to disk before the handle is dropped.
///
/// Only regular files are synced. FIFOs, devices and some network mounts
/// reject fsync even though closing them succeeds.
fn flush_to_disk(file: &File) -> io::Result<()> {
    if !file.metadata()?.is_file() {
        return Ok(());
    }

    match file.sync_all() {
        Err(e) if is_unsyncable(&e) => {
            debug!("Skipping sync on close: {}", e);
            Ok(())
        }
        other => other,
    }
}

fn is_unsyncable(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::InvalidInput | io::ErrorKind::Unsupported
    )
}

fn open_existing(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| Error::file_open(path, e))
}

/// Create a uniquely named file in `dir` that outlives its handle.
fn create_temp_file(dir: &Path) -> Result<(File, PathBuf)> {
    let temp = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .tempfile_in(dir)
        .map_err(|e| Error::temp_file_creation(dir, e))?;

    temp.keep()
        .map_err(|e| Error::temp_file_creation(dir, e.error))
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Execution
// ─────────────────────────────────────────────────────────────────────────────

/// Execute the editor with `path` as its only argument.
///
/// The editor inherits stdin/stdout/stderr and we wait for it to exit.
fn launch(editor: &str, path: &Path) -> Result<()> {
    info!("Launching editor {} on {:?}", editor, path);

    let status = Command::new(editor)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::spawn_failed(editor, e))?;

    if !status.success() {
        return Err(Error::exit_failed(editor, status));
    }

    debug!("Editor {} exited successfully", editor);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
