//! Error handling for covkit
//!
//! This module provides the strongly-typed error cases shared by the crate's
//! synchronous operations. Failures that callers may want to branch on
//! (missing archive source, missing bundled resource) get dedicated
//! variants; read/write failures travel as [`anyhow`] errors with context
//! attached at the call site.
//!
//! Operational functions return [`anyhow::Result`], so a typed
//! [`CovkitError`] stays recoverable via [`anyhow::Error::downcast_ref`]:
//!
//! ```rust,no_run
//! use covkit::archive::archive_file_sync;
//! use covkit::core::CovkitError;
//! use std::path::Path;
//!
//! let err = archive_file_sync(
//!     Path::new("missing.bin"),
//!     Path::new("out.zip"),
//!     "entry.bin",
//! )
//! .unwrap_err();
//! assert!(matches!(
//!     err.downcast_ref::<CovkitError>(),
//!     Some(CovkitError::ArchiveSourceNotFound { .. })
//! ));
//! ```
//!
//! Design notes:
//! - Missing property keys and non-converging placeholder expansion are NOT
//!   errors; the resolver degrades to empty strings and partial results
//!   (permissive build-property semantics).
//! - A missing or unreadable traversal root is NOT an error; the walker
//!   yields an empty list.
//! - Detached archiving has no caller to surface errors to; failures on that
//!   path are reported through `tracing::error!` instead (see
//!   [`crate::archive`]).

use thiserror::Error;

/// The main error type for covkit operations.
///
/// Each variant represents a failure mode callers are expected to branch
/// on. Variants carry the paths involved so messages are actionable without
/// additional context.
#[derive(Error, Debug)]
pub enum CovkitError {
    /// The source file handed to the archiver does not exist.
    ///
    /// # Fields
    /// - `path`: the source path that was not found
    #[error("archive source file not found: {path}")]
    ArchiveSourceNotFound {
        /// The source path that was not found
        path: String,
    },

    /// A bundled resource could not be located under the loader's assets
    /// root.
    ///
    /// # Fields
    /// - `path`: the full resource path that was not found
    #[error("bundled resource not found: {path}")]
    ResourceNotFound {
        /// The full resource path that was not found
        path: String,
    },
}
