//! Release packager for jqawk.
//!
//! Cross-compiles the program once per release target and packages each
//! binary as a single-entry archive:
//! - `.tar.gz` for darwin and linux targets
//! - `.zip` for windows targets
//!
//! Archives are named `jqawk-<version>-<os>-<arch>.<ext>`, with the version
//! read from the program's own source. It can be used both as a CLI tool and
//! as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod release;

// Re-export commonly used types
pub use error::{CliError, ReleaseError, Result};
