//! Core Settings struct and implementations.

use super::Target;
use std::path::{Path, PathBuf};

/// Main settings for release operations.
///
/// Central configuration for the release pipeline, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder). All paths are absolute.
///
/// # Examples
///
/// ```no_run
/// use jqawk_release::release::SettingsBuilder;
///
/// # fn example() -> jqawk_release::release::Result<()> {
/// let settings = SettingsBuilder::new().source_root(".").build()?;
/// assert_eq!(settings.program_name(), "jqawk");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Binary name every archive is built around.
    program_name: String,

    /// Checkout the compiler runs in.
    source_root: PathBuf,

    /// File holding the `var version = "..."` declaration.
    version_file: PathBuf,

    /// Directory receiving the intermediate binary and the archives.
    staging_dir: PathBuf,

    /// Compiler program (name looked up on `PATH`, or a path).
    compiler: String,

    /// Targets in build order.
    targets: Vec<Target>,
}

impl Settings {
    /// Returns the program name.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Returns the source checkout root.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Returns the file the version is resolved from.
    pub fn version_file(&self) -> &Path {
        &self.version_file
    }

    /// Returns the staging directory.
    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Returns the configured compiler program.
    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Returns the targets in build order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Returns the path the compiler writes the binary for `target` to.
    ///
    /// Appends `.exe` for Windows targets. The path is shared by every target
    /// of the same platform family, so each binary must be archived before
    /// the next compile.
    pub fn binary_path(&self, target: &Target) -> PathBuf {
        self.staging_dir
            .join(target.binary_name(&self.program_name))
    }

    /// Returns the archive path for `target` without its extension.
    pub fn archive_base_path(&self, target: &Target, version: &str) -> PathBuf {
        self.staging_dir
            .join(target.artifact_base_name(&self.program_name, version))
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        program_name: String,
        source_root: PathBuf,
        version_file: PathBuf,
        staging_dir: PathBuf,
        compiler: String,
        targets: Vec<Target>,
    ) -> Self {
        Self {
            program_name,
            source_root,
            version_file,
            staging_dir,
            compiler,
            targets,
        }
    }
}
