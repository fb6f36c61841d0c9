//! Core types shared across covkit.
//!
//! Currently this is the home of the crate's error type, [`CovkitError`].
//! Operational modules return [`anyhow::Result`] and attach context at the
//! call site; the typed variants defined here remain reachable through
//! `downcast_ref` for callers that need to branch on a specific failure.

pub mod error;

pub use error::CovkitError;
