//! # clide-core - Core Types
//!
//! Foundation crate for clide. Provides the error taxonomy shared by every
//! editor-session step and the logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - One variant per failing session step, each wrapping its cause
//! - [`LaunchFailure`] - Spawn failure vs. unsuccessful exit of the editor
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for logging errors with context
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File logging filtered by `CLIDE_LOG`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use clide_core::prelude::*;
//! ```

pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all clide crates
pub mod prelude {
    pub use super::error::{Error, LaunchFailure, Result, ResultExt};
    pub use tracing::{debug, error, info, warn};
}

pub use error::{Error, LaunchFailure, Result, ResultExt};
