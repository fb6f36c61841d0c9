//! Directory tree discovery.
//!
//! Build and coverage workflows need to enumerate output locations (class
//! directories, report folders) under a project root without retaining any
//! tree structure: the result is a flat list, freshly computed per call.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every descendant directory of `root`, depth-unbounded.
///
/// The traversal is pre-order: each directory appears before its own
/// descendants. Sibling order follows the filesystem's enumeration order
/// and is therefore platform-dependent; callers must not rely on it. Files
/// are skipped and symbolic links are not followed.
///
/// Missing data degrades silently rather than erroring: a `root` that does
/// not exist or is not a directory yields an empty list, and unreadable
/// subtrees contribute whatever could be read.
///
/// # Example
///
/// ```rust,no_run
/// use covkit::utils::fs::list_directories;
/// use std::path::Path;
///
/// for dir in list_directories(Path::new("build/classes")) {
///     println!("{}", dir.display());
/// }
/// ```
#[must_use]
pub fn list_directories(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(walkdir::DirEntry::into_path)
        .collect()
}
