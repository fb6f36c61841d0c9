//! Global constants used throughout the covkit codebase.
//!
//! This module contains the placeholder syntax, the resolution bound, and
//! the coverage artifact file names that are used across multiple modules.
//! Defining them centrally improves maintainability and makes magic numbers
//! more discoverable.

/// Regular expression recognizing `${key}` placeholders inside property
/// values. The single capturing group yields the referenced key name, which
/// is any non-empty sequence of characters excluding `}`.
///
/// There is no escaping mechanism: a literal `${x}` in source data is always
/// treated as a placeholder.
pub const PLACEHOLDER_PATTERN: &str = r"\$\{([^}]+)\}";

/// Maximum number of expansion passes performed by
/// [`PropertyStore::resolve`](crate::resolver::PropertyStore::resolve).
///
/// Cyclic references (`a=${b}`, `b=${a}`) never converge; the bound caps
/// them at a fixed cost and the partially resolved value is returned as-is.
pub const MAX_RESOLVE_PASSES: usize = 80;

/// File name of the binary coverage report produced by an instrumented run,
/// located in the project directory.
pub const BINARY_REPORT_FILENAME: &str = "jacoco.exec";

/// File name of the XML coverage report generated from the binary report,
/// located in the project directory.
pub const XML_REPORT_FILENAME: &str = "jacocoverage.report.xml";

/// Chunk size used when streaming a source file into an archive entry.
pub const ARCHIVE_BUFFER_SIZE: usize = 1024;
