//! Error types for release operations.

use super::settings::Target;
use std::{io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Result type alias for release operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while resolving, compiling or archiving a release.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// The `var version = "..."` declaration is missing or empty.
    #[error("couldn't find version: no `var version = \"...\"` declaration in {}", path.display())]
    VersionNotFound {
        /// File that was searched
        path: PathBuf,
    },

    /// The declared version cannot be used in a file name.
    #[error("version \"{version}\" in {} contains a path separator", path.display())]
    InvalidVersion {
        /// Declared value
        version: String,
        /// File that declared it
        path: PathBuf,
    },

    /// Staging directory creation failed for a reason other than pre-existence.
    #[error("failed to create staging directory {}: {error}", path.display())]
    StagingDirectory {
        /// Staging directory path
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        error: io::Error,
    },

    /// The compiler program could not be located.
    #[error("compiler `{program}` not found: {error}")]
    CompilerNotFound {
        /// Program name or path as configured
        program: String,
        /// Lookup failure
        #[source]
        error: which::Error,
    },

    /// A subprocess could not be spawned.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command that failed to start
        command: String,
        /// Spawn error
        #[source]
        error: io::Error,
    },

    /// The compiler exited unsuccessfully for a target.
    #[error("compiling {target} failed: compiler {status}")]
    CompileFailed {
        /// Target being compiled
        target: Target,
        /// Exit status description
        status: String,
    },

    /// Archive creation failed.
    #[error("failed to create archive {}: {source}", path.display())]
    ArchiveFailed {
        /// Archive that was being written
        path: PathBuf,
        /// What went wrong
        #[source]
        source: ArchiveError,
    },

    /// Filesystem operation failed.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// Action being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        error: io::Error,
    },

    /// Settings could not be assembled.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A blocking task did not complete.
    #[error("{0}")]
    GenericError(String),
}

/// Failures inside the archive writers.
#[derive(Debug, DeriveError)]
pub enum ArchiveError {
    /// The binary to package does not exist.
    #[error("binary {} does not exist", .0.display())]
    MissingBinary(PathBuf),

    /// The binary path has no file name component.
    #[error("binary path {} has no file name", .0.display())]
    InvalidBinaryPath(PathBuf),

    /// I/O failure while reading the binary or writing the archive.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Zip format failure.
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    /// Actionable hints for the operator, printed under the error message.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::VersionNotFound { path } => vec![format!(
                "Declare the release version in {} as: var version = \"X.Y.Z\"",
                path.display()
            )],
            Self::InvalidVersion { path, .. } => vec![format!(
                "Remove '/' and '\\' from the version declared in {}",
                path.display()
            )],
            Self::StagingDirectory { path, error } => match error.kind() {
                io::ErrorKind::PermissionDenied => vec![format!(
                    "Check write permissions on {}",
                    path.parent().unwrap_or(path).display()
                )],
                io::ErrorKind::NotFound => {
                    vec!["The staging directory's parent must already exist".to_string()]
                }
                _ => vec![format!("Remove or rename {} and retry", path.display())],
            },
            Self::CompilerNotFound { program, .. } => vec![format!(
                "Install `{program}` or point --compiler / JQAWK_RELEASE_COMPILER at it"
            )],
            Self::CommandFailed { .. } | Self::CompileFailed { .. } => vec![
                "Run the compiler by hand for the failing target to see the full output"
                    .to_string(),
                "Cross-compile failures usually repeat for every target until the toolchain is fixed"
                    .to_string(),
            ],
            Self::ArchiveFailed { .. } => {
                vec!["Check free disk space in the staging directory".to_string()]
            }
            Self::Fs { .. } | Self::InvalidSettings(_) | Self::GenericError(_) => Vec::new(),
        }
    }
}

/// Attaches an action and path to filesystem errors.
pub trait ErrorExt<T> {
    /// Wraps the error as [`Error::Fs`] with the given context.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Returns early with an [`Error::InvalidSettings`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::release::Error::InvalidSettings(format!($($arg)*)))
    };
}
