//! Single-entry ZIP packaging of build artifacts.
//!
//! Coverage workflows archive one artifact at a time (a binary report, an
//! XML report) into a standard ZIP container holding exactly one entry. The
//! entry name is caller-supplied and independent of the source file's own
//! name.
//!
//! Three entry points share one implementation:
//!
//! - [`archive_file_sync`] blocks until all bytes are copied and all handles
//!   closed, and surfaces failures to the caller.
//! - [`archive_file`] runs the same operation on the blocking thread pool
//!   and awaits it, for callers already inside a Tokio runtime.
//! - [`archive_file_detached`] is fire-and-forget: the caller gets no
//!   completion signal and no result. Failures on this path are reported
//!   through `tracing::error!`, never silently dropped, since there is no
//!   return path to throw them back on. There is no cancellation; once
//!   started the task runs to completion or failure.
//!
//! Concurrent calls targeting distinct destination paths are safe without
//! locking: each call owns its own buffer and file handles. Calls targeting
//! the same destination race (last writer wins).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::constants::ARCHIVE_BUFFER_SIZE;
use crate::core::CovkitError;

/// Compresses `src` into a single-entry ZIP archive at `dst`, blocking the
/// calling thread until every byte is copied and every handle closed.
///
/// Any existing file at `dst` is overwritten. The archive contains exactly
/// one entry named `entry_name`, written with the container's default
/// compression settings. An empty source produces a valid archive with a
/// zero-length entry.
///
/// Handles are released innermost-first on every exit path: the entry is
/// finalized, then the ZIP writer, then the destination file, with RAII
/// covering early returns.
///
/// # Errors
///
/// Returns [`CovkitError::ArchiveSourceNotFound`] if `src` does not exist,
/// and an I/O error with context for any read or write failure (including an
/// unwritable destination).
pub fn archive_file_sync(src: &Path, dst: &Path, entry_name: &str) -> Result<()> {
    let mut reader = match File::open(src) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(CovkitError::ArchiveSourceNotFound {
                path: src.display().to_string(),
            }
            .into());
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to open archive source {}", src.display())
            });
        }
    };

    let dst_file = File::create(dst)
        .with_context(|| format!("failed to create archive {}", dst.display()))?;
    let mut writer = ZipWriter::new(dst_file);
    writer
        .start_file(entry_name, SimpleFileOptions::default())
        .with_context(|| format!("failed to start archive entry {entry_name}"))?;

    let mut buffer = [0u8; ARCHIVE_BUFFER_SIZE];
    loop {
        let read = reader
            .read(&mut buffer)
            .with_context(|| format!("failed to read archive source {}", src.display()))?;
        if read == 0 {
            break;
        }
        writer
            .write_all(&buffer[..read])
            .with_context(|| format!("failed to write archive {}", dst.display()))?;
    }

    // finish() writes the central directory; dropping the writer alone would
    // leave a truncated container.
    writer
        .finish()
        .with_context(|| format!("failed to finalize archive {}", dst.display()))?;
    Ok(())
}

/// Compresses `src` into a single-entry ZIP archive at `dst` without
/// blocking the async caller.
///
/// This is [`archive_file_sync`] run under `spawn_blocking` and awaited;
/// failures surface to the caller exactly as in the synchronous mode.
pub async fn archive_file(
    src: impl Into<PathBuf>,
    dst: impl Into<PathBuf>,
    entry_name: impl Into<String>,
) -> Result<()> {
    let (src, dst, entry_name) = (src.into(), dst.into(), entry_name.into());
    tokio::task::spawn_blocking(move || archive_file_sync(&src, &dst, &entry_name))
        .await
        .context("archive task terminated abnormally")?
}

/// Starts compressing `src` into a single-entry ZIP archive at `dst` and
/// returns immediately (fire-and-forget).
///
/// The caller receives no completion signal and no result; callers that need
/// completion notification must build it externally. Failures are reported
/// through `tracing::error!` rather than returned.
///
/// # Panics
///
/// Panics if called outside a Tokio runtime, since the work is scheduled on
/// the runtime's blocking thread pool.
pub fn archive_file_detached(
    src: impl Into<PathBuf>,
    dst: impl Into<PathBuf>,
    entry_name: impl Into<String>,
) {
    let (src, dst, entry_name) = (src.into(), dst.into(), entry_name.into());
    tokio::task::spawn_blocking(move || {
        if let Err(err) = archive_file_sync(&src, &dst, &entry_name) {
            tracing::error!(
                "detached archiving of {} into {} failed: {err:#}",
                src.display(),
                dst.display()
            );
        }
    });
}
