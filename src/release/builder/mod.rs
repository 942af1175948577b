//! Release orchestration.
//!
//! This module provides the [`Releaser`] that drives a full release:
//!
//! 1. Resolves the version from the configured source file
//! 2. Ensures the staging directory exists
//! 3. For each target in order, compiles the binary and archives it
//! 4. Returns an [`ArchiveArtifact`](crate::release::ArchiveArtifact) per target
//!
//! # Example
//!
//! ```no_run
//! use jqawk_release::cli::RuntimeConfig;
//! use jqawk_release::release::{Releaser, SettingsBuilder};
//!
//! # async fn example() -> jqawk_release::release::Result<()> {
//! let settings = SettingsBuilder::new().source_root(".").build()?;
//! let report = Releaser::new(settings)
//!     .release(&RuntimeConfig::default())
//!     .await?;
//!
//! for artifact in &report.artifacts {
//!     println!("{}: {}", artifact.target, artifact.path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::{ReleaseReport, Releaser};
