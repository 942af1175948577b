//! Cross-compile and package release archives.
//!
//! This module provides the full release pipeline for a Go program:
//! - Version resolution from the program's source ([`crate::metadata`])
//! - One compiler invocation per [`Target`] in [`TARGET_MATRIX`]
//! - One single-binary archive per target (`.tar.gz`, or `.zip` on Windows)
//!
//! # Example
//!
//! ```no_run
//! use jqawk_release::cli::RuntimeConfig;
//! use jqawk_release::release::{Releaser, SettingsBuilder};
//!
//! # async fn example() -> jqawk_release::release::Result<()> {
//! let settings = SettingsBuilder::new().build()?;
//! let report = Releaser::new(settings).release(&RuntimeConfig::default()).await?;
//! println!("Released {}", report.version);
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod builder;
pub mod compile;
pub mod error;
pub mod settings;
pub mod utils;

pub use builder::{ReleaseReport, Releaser};
pub use error::{Error, ErrorExt, Result};
pub use settings::{Arch, ArchiveKind, Os, Settings, SettingsBuilder, TARGET_MATRIX, Target};

use std::path::PathBuf;

/// A packaged release archive for one target.
#[derive(Debug, Clone)]
pub struct ArchiveArtifact {
    /// Target the archived binary was compiled for.
    pub target: Target,
    /// Archive format.
    pub kind: ArchiveKind,
    /// Path of the archive in the staging directory.
    pub path: PathBuf,
    /// Archive size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive.
    pub checksum: String,
}
