//! Main release orchestration.
//!
//! This module provides the [`Releaser`] that walks the target matrix,
//! compiling and archiving one target at a time.

use super::checksum::calculate_sha256;
use crate::{
    cli::RuntimeConfig,
    metadata::{self, Version},
    release::{
        ArchiveArtifact, Error, ErrorExt, Result, Settings, archive, compile::Compiler,
        settings::Target, utils::fs,
    },
};

/// Outcome of a completed release run.
#[derive(Debug)]
pub struct ReleaseReport {
    /// Version every artifact was named with.
    pub version: Version,
    /// One archive per target, in build order.
    pub artifacts: Vec<ArchiveArtifact>,
}

/// Main release orchestrator.
///
/// Targets are processed strictly one after another. Every target writes its
/// binary to a path shared with the other targets of its platform family, so
/// a target's archive is always complete before the next compile starts.
///
/// Any failure stops the run: targets after the failing one are never
/// attempted and no partial report is produced.
#[derive(Debug)]
pub struct Releaser {
    settings: Settings,
}

impl Releaser {
    /// Creates a releaser with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs the release pipeline for every configured target.
    ///
    /// # Errors
    ///
    /// Stops at the first of:
    /// - [`Error::VersionNotFound`] (or [`Error::Fs`]) resolving the version
    /// - [`Error::StagingDirectory`] creating the staging directory
    /// - [`Error::CompilerNotFound`], [`Error::CommandFailed`] or
    ///   [`Error::CompileFailed`] compiling a target
    /// - [`Error::ArchiveFailed`] packaging a target
    pub async fn release(&self, runtime: &RuntimeConfig) -> Result<ReleaseReport> {
        let settings = &self.settings;

        let version = metadata::load_version(settings.version_file()).await?;
        if !version.is_semver() {
            runtime.warn(&format!(
                "Version '{}' in {} is not semantic versioning; using it as-is",
                version,
                settings.version_file().display()
            ));
        }
        runtime.section(&format!("Releasing {} {}", settings.program_name(), version));

        let staging_dir = settings.staging_dir();
        fs::create_dir(staging_dir)
            .await
            .map_err(|error| Error::StagingDirectory {
                path: staging_dir.to_path_buf(),
                error,
            })?;
        runtime.verbose_println(&format!("Staging directory: {}", staging_dir.display()));

        let compiler = Compiler::locate(settings.compiler(), settings.source_root())?;
        runtime.verbose_println(&format!("Compiler: {}", compiler.program().display()));

        let total = settings.targets().len();
        let mut artifacts = Vec::with_capacity(total);

        for (index, target) in settings.targets().iter().enumerate() {
            runtime.progress(&format!("[{}/{}] building {}", index + 1, total, target));
            log::info!("Building {} {} for {}", settings.program_name(), version, target);

            let artifact = self.release_target(&compiler, target, &version).await?;

            runtime.indent(&format!(
                "{} ({} bytes, sha256 {})",
                artifact.path.display(),
                artifact.size,
                artifact.checksum
            ));
            artifacts.push(artifact);
        }

        runtime.success(&format!(
            "Packaged {} {} for {} targets in {}",
            settings.program_name(),
            version,
            artifacts.len(),
            staging_dir.display()
        ));

        Ok(ReleaseReport { version, artifacts })
    }

    /// Compiles and archives a single target.
    async fn release_target(
        &self,
        compiler: &Compiler,
        target: &Target,
        version: &Version,
    ) -> Result<ArchiveArtifact> {
        let binary_path = self.settings.binary_path(target);
        compiler.compile(target, &binary_path).await?;

        let kind = target.archive_kind();
        let archive_base = self.settings.archive_base_path(target, version.as_str());
        let path = archive::archive(&binary_path, &archive_base, kind).await?;

        let size = tokio::fs::metadata(&path)
            .await
            .fs_context("reading artifact metadata", &path)?
            .len();
        let checksum = calculate_sha256(&path).await?;

        Ok(ArchiveArtifact {
            target: *target,
            kind,
            path,
            size,
            checksum,
        })
    }
}
