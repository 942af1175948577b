//! Command line argument parsing and validation.
//!
//! A bare `jqawk-release` builds the full target matrix from the current
//! directory. Every option only moves an input or output; none of them
//! change which targets are built.

use crate::release::{
    self, Settings, SettingsBuilder,
    settings::{DEFAULT_COMPILER, DEFAULT_STAGING_DIR, DEFAULT_VERSION_FILE},
};
use clap::Parser;
use std::path::PathBuf;

/// Release packager for jqawk
#[derive(Parser, Debug)]
#[command(
    name = "jqawk-release",
    version,
    about = "Cross-compile jqawk for every release target and archive each binary",
    long_about = "Cross-compiles jqawk for every release target and packages each binary.

Reads the version from `var version = \"...\"` in jqawk.go, then for each of
darwin/arm64, darwin/amd64, linux/arm64, linux/amd64, linux/386,
windows/arm64, windows/amd64 and windows/386 runs `go build` and writes
build/jqawk-<version>-<os>-<arch>.tar.gz (.zip for windows).

Usage:
  jqawk-release
  jqawk-release --source-root ~/src/jqawk
  JQAWK_RELEASE_COMPILER=/usr/local/go/bin/go jqawk-release

Exit code 0 = every target was compiled and archived."
)]
pub struct Args {
    /// Source checkout to build
    #[arg(long, value_name = "DIR", env = "JQAWK_RELEASE_SOURCE_ROOT", default_value = ".")]
    pub source_root: PathBuf,

    /// File declaring `var version = "..."`, relative to the source root
    #[arg(long, value_name = "PATH", env = "JQAWK_RELEASE_VERSION_FILE", default_value = DEFAULT_VERSION_FILE)]
    pub version_file: PathBuf,

    /// Directory receiving binaries and archives, relative to the source root
    #[arg(long, value_name = "PATH", env = "JQAWK_RELEASE_STAGING_DIR", default_value = DEFAULT_STAGING_DIR)]
    pub staging_dir: PathBuf,

    /// Compiler program, looked up on PATH unless it is a path
    #[arg(long, value_name = "PROGRAM", env = "JQAWK_RELEASE_COMPILER", default_value = DEFAULT_COMPILER)]
    pub compiler: String,

    /// Print staging and compiler details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.source_root.is_dir() {
            return Err(format!(
                "Source root is not a directory: {}",
                self.source_root.display()
            ));
        }

        if self.compiler.trim().is_empty() {
            return Err("Compiler cannot be empty".to_string());
        }

        Ok(())
    }

    /// Builds release settings for the full target matrix
    pub fn to_settings(&self) -> release::Result<Settings> {
        SettingsBuilder::new()
            .source_root(&self.source_root)
            .version_file(&self.version_file)
            .staging_dir(&self.staging_dir)
            .compiler(self.compiler.as_str())
            .build()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(super::OutputManager::new(args.verbose, args.quiet))
    }
}

impl RuntimeConfig {
    /// Creates a runtime configuration around an output manager
    pub fn new(output: super::OutputManager) -> Self {
        Self { output }
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        self.output.indent(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::TARGET_MATRIX;

    #[test]
    fn bare_invocation_uses_defaults() {
        let args = Args::try_parse_from(["jqawk-release"]).unwrap();
        assert_eq!(args.source_root, PathBuf::from("."));
        assert_eq!(args.version_file, PathBuf::from("jqawk.go"));
        assert_eq!(args.staging_dir, PathBuf::from("build"));
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["jqawk-release", "-v", "-q"]).is_err());
    }

    #[test]
    fn settings_cover_full_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let args = Args::try_parse_from([
            "jqawk-release",
            "--source-root",
            root.as_str(),
            "--compiler",
            "/opt/go/bin/go",
        ])
        .unwrap();

        args.validate().unwrap();
        let settings = args.to_settings().unwrap();
        assert_eq!(settings.targets(), TARGET_MATRIX.as_slice());
        assert_eq!(settings.compiler(), "/opt/go/bin/go");
        assert_eq!(settings.staging_dir(), dir.path().join("build"));
    }

    #[test]
    fn missing_source_root_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope").to_string_lossy().into_owned();
        let args = Args::try_parse_from(["jqawk-release", "--source-root", missing.as_str()]).unwrap();
        assert!(args.validate().unwrap_err().contains("not a directory"));
    }
}
