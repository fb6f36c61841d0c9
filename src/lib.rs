//! covkit - utilities for build/coverage-reporting workflows
//!
//! A small utility layer for workflows that instrument a build, collect a
//! coverage report, and package the resulting artifacts. The crate owns the
//! pieces with real algorithmic content; running the build itself, parsing
//! or merging coverage reports, and presenting results are collaborator
//! concerns invoked around it.
//!
//! # Core Modules
//!
//! - [`resolver`] - Flat key→value property store with bounded, transitive
//!   `${key}` placeholder expansion
//! - [`pattern`] - Regex match checking and flattened capture-group
//!   extraction
//! - [`archive`] - Single-entry ZIP packaging of artifacts, synchronous,
//!   async, or fire-and-forget
//! - [`resource`] - Full in-memory loading of bundled assets
//! - [`utils`] - Recursive directory tree discovery
//! - [`report`] - Coverage report artifact locations
//!
//! ## Supporting Modules
//! - [`core`] - Error types
//! - [`constants`] - Placeholder syntax, resolution bound, artifact names
//!
//! # Design
//!
//! Lookup-style operations are deliberately permissive, matching
//! build-property semantics: a missing property key resolves to the empty
//! string, placeholder cycles terminate with a best-effort partial value,
//! and a missing traversal root yields an empty directory list. File and
//! resource operations are strict: a missing archive source or bundled
//! resource is a reported failure, and the fire-and-forget archive mode
//! logs failures through `tracing` rather than dropping them.
//!
//! # Example
//!
//! ```rust
//! use covkit::resolver::PropertyStore;
//!
//! let store: PropertyStore = [
//!     ("build.dir".to_string(), "build".to_string()),
//!     ("classes.dir".to_string(), "${build.dir}/classes".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(store.resolve("classes.dir"), "build/classes");
//! ```
//!
//! Typical control flow: load project properties into a [`PropertyStore`]
//! and resolve the keys the build needs, discover report/output directories
//! with [`utils::fs::list_directories`], fetch the bundled instrumentation
//! payload with [`resource::ResourceLoader`], run the build (out of scope),
//! then package the report with [`archive::archive_file_sync`] or its
//! detached variant.
//!
//! [`PropertyStore`]: resolver::PropertyStore

pub mod archive;
pub mod constants;
pub mod core;
pub mod pattern;
pub mod report;
pub mod resolver;
pub mod resource;
pub mod utils;
