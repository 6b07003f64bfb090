//! Word list permission check.
//!
//! The word list names exactly the things its owner wants hidden, so it must
//! be private: mode `0700`, nothing for group or others. The check runs
//! before the file is opened for reading.

use crate::{Error, Result};
use std::path::Path;

/// Required permission bits for the word list.
pub const REQUIRED_MODE: u32 = 0o700;

/// Verifies that `path` has permission bits exactly `0700`.
///
/// Symlinks are followed. Only the `0o777` bits are compared; setuid,
/// setgid and sticky bits are ignored.
///
/// # Errors
///
/// Returns [`Error::InsecurePermissions`] on a mode mismatch, or
/// [`Error::OperationFailed`] if the file cannot be stat'ed.
#[cfg(unix)]
pub fn check_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)
        .map_err(|e| Error::operation("stat_config", format!("{}: {e}", path.display())))?;

    let mode = metadata.permissions().mode() & 0o777;
    if mode != REQUIRED_MODE {
        return Err(Error::InsecurePermissions {
            path: path.to_path_buf(),
            mode,
        });
    }

    Ok(())
}

/// Verifies that `path` exists.
///
/// Non-Unix platforms have no mode bits to compare, so only existence is
/// checked.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] if the file cannot be stat'ed.
#[cfg(not(unix))]
pub fn check_permissions(path: &Path) -> Result<()> {
    std::fs::metadata(path)
        .map_err(|e| Error::operation("stat_config", format!("{}: {e}", path.display())))?;
    tracing::warn!(path = %path.display(), "permission bits are not checked on this platform");
    Ok(())
}
