//! Destination directory precondition check.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, Result};

/// Ensure `dir` exists, is a directory, and is accessible.
///
/// Missing, non-directory, and permission-denied targets all report
/// [`Error::NotADirectory`]; the caller's remedy is the same for each. Run
/// this before configuring a sink's directory — the sink itself never
/// re-checks during write or create.
pub fn check_dir(dir: impl AsRef<Path>) -> Result<()> {
    match fs::metadata(dir.as_ref()) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory),
        Err(err) => match err.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => Err(Error::NotADirectory),
            _ => Err(Error::Io(err)),
        },
    }
}
