//! File system utilities for release staging.

use std::{io, path::Path};
use tokio::fs;

/// Creates the given directory, treating pre-existence as success.
///
/// Only the final component is created; a missing parent is an error. A
/// pre-existing path that is not a directory is an error.
pub async fn create_dir(path: &Path) -> io::Result<()> {
    match fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if fs::metadata(path).await?.is_dir() {
                Ok(())
            } else {
                Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} exists but is not a directory", path.display()),
                ))
            }
        }
        Err(e) => Err(e),
    }
}
