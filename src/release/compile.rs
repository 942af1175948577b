//! External compiler invocation.
//!
//! Runs `go build` once per target. The target platform reaches the compiler
//! through `GOOS`/`GOARCH` set on that one subprocess; the release process's
//! own environment is never modified.

use crate::release::{Error, Result, settings::Target};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Environment variable selecting the compiler's target operating system.
pub const TARGET_OS_VAR: &str = "GOOS";

/// Environment variable selecting the compiler's target architecture.
pub const TARGET_ARCH_VAR: &str = "GOARCH";

/// A located compiler, bound to the checkout it builds.
#[derive(Clone, Debug)]
pub struct Compiler {
    program: PathBuf,
    working_dir: PathBuf,
}

impl Compiler {
    /// Creates a compiler from an already-resolved program path.
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Resolves `program` on `PATH` (or relative to `working_dir` if it is a
    /// path).
    pub fn locate(program: &str, working_dir: &Path) -> Result<Self> {
        let resolved = which::which_in(program, std::env::var_os("PATH"), working_dir)
            .map_err(|error| Error::CompilerNotFound {
                program: program.to_string(),
                error,
            })?;
        log::debug!("Found compiler at: {}", resolved.display());
        Ok(Self::new(resolved, working_dir))
    }

    /// Path of the compiler program.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Builds the command compiling the checkout for `target` into `output_path`.
    pub fn command(&self, target: &Target, output_path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("build")
            .arg("-o")
            .arg(output_path)
            .arg(".")
            .current_dir(&self.working_dir)
            .env(TARGET_OS_VAR, target.os().as_str())
            .env(TARGET_ARCH_VAR, target.arch().as_str());
        cmd
    }

    /// Compiles the checkout for `target`, writing the binary to `output_path`.
    ///
    /// Blocks until the compiler exits; there is no timeout.
    ///
    /// # Errors
    ///
    /// - [`Error::CommandFailed`] if the compiler cannot be started
    /// - [`Error::CompileFailed`] if it exits unsuccessfully
    pub async fn compile(&self, target: &Target, output_path: &Path) -> Result<()> {
        log::debug!(
            "Running {} build -o {} . ({}={} {}={})",
            self.program.display(),
            output_path.display(),
            TARGET_OS_VAR,
            target.os(),
            TARGET_ARCH_VAR,
            target.arch()
        );

        let status = self
            .command(target, output_path)
            .status()
            .await
            .map_err(|error| Error::CommandFailed {
                command: format!("{} build", self.program.display()),
                error,
            })?;

        if !status.success() {
            let status = match status.code() {
                Some(code) => format!("exited with code {code}"),
                None => "was terminated by a signal".to_string(),
            };
            return Err(Error::CompileFailed {
                target: *target,
                status,
            });
        }

        Ok(())
    }
}
