//! Filesystem utilities.
//!
//! # Modules
//!
//! - [`fs`] - Directory tree discovery

pub mod fs;

pub use fs::list_directories;
