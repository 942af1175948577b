//! Release version discovery from the project's source.

use crate::release::{Error, ErrorExt, Result};
use regex::Regex;
use std::{fmt, path::Path, sync::LazyLock};

/// Matches `var version = "<value>"` with the value on a single line.
static VERSION_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"var version = "([^"\r\n]*)""#).expect("version declaration pattern is valid")
});

/// Release version, as declared in source.
///
/// Never empty. Used verbatim in every artifact name of a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Version(String);

impl Version {
    /// Returns the version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the version is valid semantic versioning.
    pub fn is_semver(&self) -> bool {
        semver::Version::parse(&self.0).is_ok()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the declared version from source text.
///
/// Only the first declaration counts. Returns `None` when there is no
/// declaration or the first one is empty.
pub fn parse_version(content: &str) -> Option<&str> {
    VERSION_DECLARATION
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty())
}

/// Reads `source_path` and resolves the release version from it.
///
/// # Errors
///
/// - [`Error::Fs`] if the file cannot be read
/// - [`Error::VersionNotFound`] if it holds no non-empty declaration
/// - [`Error::InvalidVersion`] if the value contains a path separator
pub async fn load_version(source_path: &Path) -> Result<Version> {
    let content = tokio::fs::read_to_string(source_path)
        .await
        .fs_context("reading version file", source_path)?;

    let version = parse_version(&content)
        .map(|value| Version(value.to_string()))
        .ok_or_else(|| Error::VersionNotFound {
            path: source_path.to_path_buf(),
        })?;

    // The version becomes part of every archive file name.
    if version.as_str().contains(['/', '\\']) {
        return Err(Error::InvalidVersion {
            version: version.0,
            path: source_path.to_path_buf(),
        });
    }

    log::debug!("Resolved version {} from {}", version, source_path.display());
    Ok(version)
}
