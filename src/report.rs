//! Coverage report artifact locations.
//!
//! An instrumented run drops its binary coverage report in the project
//! directory, and the XML report generated from it lands next to it. These
//! helpers compute those paths; whether the files exist is the caller's
//! concern.

use std::path::{Path, PathBuf};

use crate::constants::{BINARY_REPORT_FILENAME, XML_REPORT_FILENAME};

/// Path of the binary coverage report inside `project_dir`.
#[must_use]
pub fn binary_report_path(project_dir: &Path) -> PathBuf {
    project_dir.join(BINARY_REPORT_FILENAME)
}

/// Path of the XML coverage report inside `project_dir`.
#[must_use]
pub fn xml_report_path(project_dir: &Path) -> PathBuf {
    project_dir.join(XML_REPORT_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_paths_join_project_dir() {
        let project = Path::new("/work/demo");
        assert_eq!(
            binary_report_path(project),
            Path::new("/work/demo/jacoco.exec")
        );
        assert_eq!(
            xml_report_path(project),
            Path::new("/work/demo/jacocoverage.report.xml")
        );
    }
}
