//! Builder for constructing Settings.

use super::{Settings, TARGET_MATRIX, Target};
use crate::{
    bail,
    release::error::{ErrorExt, Result},
};
use path_absolutize::Absolutize;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Program every release archive is built around.
pub const DEFAULT_PROGRAM: &str = "jqawk";

/// Source file declaring `var version = "..."`, relative to the source root.
pub const DEFAULT_VERSION_FILE: &str = "jqawk.go";

/// Staging directory, relative to the source root.
pub const DEFAULT_STAGING_DIR: &str = "build";

/// External compiler program.
pub const DEFAULT_COMPILER: &str = "go";

/// Builder for constructing [`Settings`].
///
/// Every field has a default, so `SettingsBuilder::new().build()` describes a
/// full-matrix release of the checkout in the current directory. Relative
/// version-file and staging paths are resolved against the source root.
///
/// # Examples
///
/// ```no_run
/// use jqawk_release::release::{Arch, Os, SettingsBuilder, Target};
///
/// # fn example() -> jqawk_release::release::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_root("/src/jqawk")
///     .compiler("/usr/local/go/bin/go")
///     .targets(vec![Target::new(Os::Linux, Arch::Amd64)])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    program_name: Option<String>,
    source_root: Option<PathBuf>,
    version_file: Option<PathBuf>,
    staging_dir: Option<PathBuf>,
    compiler: Option<String>,
    targets: Option<Vec<Target>>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the program name.
    ///
    /// Default: `jqawk`
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Sets the source checkout root.
    ///
    /// Default: current directory
    pub fn source_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the version source file.
    ///
    /// Default: `jqawk.go`
    pub fn version_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.version_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the staging directory.
    ///
    /// Default: `build`
    pub fn staging_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.staging_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the compiler program.
    ///
    /// Default: `go`
    pub fn compiler(mut self, program: impl Into<String>) -> Self {
        self.compiler = Some(program.into());
        self
    }

    /// Restricts the build to specific targets, in the given order.
    ///
    /// Default: [`TARGET_MATRIX`]
    pub fn targets(mut self, targets: Vec<Target>) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the program name or compiler is empty, if the
    /// target list is empty or repeats a target, or if the current directory
    /// cannot be determined for path resolution.
    pub fn build(self) -> Result<Settings> {
        let program_name = self
            .program_name
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        if program_name.is_empty() {
            bail!("program name must not be empty");
        }

        let compiler = self
            .compiler
            .unwrap_or_else(|| DEFAULT_COMPILER.to_string());
        if compiler.is_empty() {
            bail!("compiler must not be empty");
        }

        let targets = self.targets.unwrap_or_else(|| TARGET_MATRIX.to_vec());
        if targets.is_empty() {
            bail!("at least one target is required");
        }
        let mut seen = HashSet::new();
        for target in &targets {
            if !seen.insert(target) {
                bail!("target {} is listed more than once", target);
            }
        }

        let source_root = self.source_root.unwrap_or_else(|| PathBuf::from("."));
        let source_root = absolute(&source_root)?;
        let version_file = absolute(&source_root.join(
            self.version_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VERSION_FILE)),
        ))?;
        let staging_dir = absolute(&source_root.join(
            self.staging_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STAGING_DIR)),
        ))?;

        Ok(Settings::new(
            program_name,
            source_root,
            version_file,
            staging_dir,
            compiler,
            targets,
        ))
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .fs_context("resolving absolute path", path)?
        .into_owned())
}
