//! clide-editor - Edit a file in the user's preferred editor
//!
//! Resolves an editor command (explicit option, `$EDITOR`, or a per-platform
//! default), opens or creates the target file, runs the editor as a blocking
//! child process on the caller's terminal, and reads the result back.
//!
//! ```no_run
//! use clide_editor::{EditorOptions, EditorSession};
//!
//! # fn main() -> clide_core::Result<()> {
//! let session = EditorSession::open(EditorOptions::default())?;
//! session.run()?;
//! let content = session.read_all()?;
//! session.close()?;
//! # let _ = content;
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod options;
pub mod resolver;
pub mod session;

pub use env::{EnvProvider, SystemEnv, EDITOR_VAR};
pub use options::EditorOptions;
pub use resolver::{default_editor, resolve_editor, DefaultEditor, Platform, DEFAULT_EDITORS};
pub use session::{
    edit_bytes, edit_bytes_with, edit_string, EditorSession, FileOrigin, TEMP_FILE_PREFIX,
};
