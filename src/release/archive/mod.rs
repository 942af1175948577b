//! Single-binary archive creation.
//!
//! Each release target ships as one archive holding exactly one entry: the
//! binary, stored under its bare file name. Windows targets get a `.zip`,
//! everything else a `.tar.gz`.

mod tarball;
mod zipfile;

use crate::release::{
    Error, Result,
    error::ArchiveError,
    settings::ArchiveKind,
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

pub use tarball::create_tar_gz;
pub use zipfile::create_zip;

/// Returns `<archive_base>.<ext>` for the given kind.
pub fn archive_path(archive_base: &Path, kind: ArchiveKind) -> PathBuf {
    let mut name = OsString::from(archive_base.as_os_str());
    name.push(".");
    name.push(kind.extension());
    PathBuf::from(name)
}

/// Packages `binary_path` into `<archive_base>.<ext>`.
///
/// Writing happens on the blocking pool; the call completes only once the
/// archive is fully written, so the binary may be overwritten afterwards.
///
/// # Errors
///
/// Returns [`Error::ArchiveFailed`] if the binary is missing or the archive
/// cannot be written. A partially written file may remain in that case.
pub async fn archive(binary_path: &Path, archive_base: &Path, kind: ArchiveKind) -> Result<PathBuf> {
    let path = archive_path(archive_base, kind);
    let binary = binary_path.to_path_buf();
    let out = path.clone();

    let written = tokio::task::spawn_blocking(move || match kind {
        ArchiveKind::TarGzip => create_tar_gz(&binary, &out),
        ArchiveKind::Zip => create_zip(&binary, &out),
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))?;

    written.map_err(|source| Error::ArchiveFailed {
        path: path.clone(),
        source,
    })?;

    log::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Validates the binary and returns the name it is stored under.
fn entry_name(binary_path: &Path) -> std::result::Result<String, ArchiveError> {
    if !binary_path.is_file() {
        return Err(ArchiveError::MissingBinary(binary_path.to_path_buf()));
    }
    binary_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ArchiveError::InvalidBinaryPath(binary_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::{fs::File, io::Read};

    fn tar_entries(path: &Path) -> Vec<(String, Vec<u8>)> {
        let mut archive = tar::Archive::new(GzDecoder::new(File::open(path).unwrap()));
        let entries = archive
            .entries()
            .unwrap()
            .map(|entry| {
                let mut entry = entry.unwrap();
                let name = entry.path().unwrap().to_string_lossy().into_owned();
                let mut data = Vec::new();
                entry.read_to_end(&mut data).unwrap();
                (name, data)
            })
            .collect();
        entries
    }

    fn zip_entries(path: &Path) -> Vec<(String, Vec<u8>)> {
        let mut archive = ::zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        let entries = (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut data = Vec::new();
                file.read_to_end(&mut data).unwrap();
                (file.name().to_string(), data)
            })
            .collect();
        entries
    }

    #[test]
    fn archive_path_appends_extension() {
        let base = Path::new("build/jqawk-1.2.0-linux-amd64");
        assert_eq!(
            archive_path(base, ArchiveKind::TarGzip),
            Path::new("build/jqawk-1.2.0-linux-amd64.tar.gz")
        );
        let base = Path::new("build/jqawk-1.2.0-windows-386");
        assert_eq!(
            archive_path(base, ArchiveKind::Zip),
            Path::new("build/jqawk-1.2.0-windows-386.zip")
        );
    }

    #[tokio::test]
    async fn tarball_holds_only_the_binary() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("jqawk");
        std::fs::write(&binary, b"\x7fELF linux binary").unwrap();

        let path = archive(
            &binary,
            &dir.path().join("jqawk-1.2.0-linux-amd64"),
            ArchiveKind::TarGzip,
        )
        .await
        .unwrap();

        assert_eq!(path, dir.path().join("jqawk-1.2.0-linux-amd64.tar.gz"));
        assert_eq!(
            tar_entries(&path),
            vec![("jqawk".to_string(), b"\x7fELF linux binary".to_vec())]
        );
    }

    #[tokio::test]
    async fn zip_holds_only_the_binary() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("jqawk.exe");
        std::fs::write(&binary, b"MZ windows binary").unwrap();

        let path = archive(
            &binary,
            &dir.path().join("jqawk-1.2.0-windows-amd64"),
            ArchiveKind::Zip,
        )
        .await
        .unwrap();

        assert_eq!(path, dir.path().join("jqawk-1.2.0-windows-amd64.zip"));
        assert_eq!(
            zip_entries(&path),
            vec![("jqawk.exe".to_string(), b"MZ windows binary".to_vec())]
        );
    }

    #[tokio::test]
    async fn rewriting_replaces_previous_archive() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("jqawk");
        let base = dir.path().join("jqawk-1.2.0-darwin-arm64");

        std::fs::write(&binary, b"first").unwrap();
        archive(&binary, &base, ArchiveKind::TarGzip).await.unwrap();
        std::fs::write(&binary, b"second").unwrap();
        let path = archive(&binary, &base, ArchiveKind::TarGzip).await.unwrap();

        assert_eq!(
            tar_entries(&path),
            vec![("jqawk".to_string(), b"second".to_vec())]
        );
    }

    #[tokio::test]
    async fn missing_binary_is_archive_failure() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("jqawk.exe");

        let err = archive(&binary, &dir.path().join("jqawk-1.2.0-windows-arm64"), ArchiveKind::Zip)
            .await
            .unwrap_err();

        match err {
            Error::ArchiveFailed { path, source } => {
                assert_eq!(path, dir.path().join("jqawk-1.2.0-windows-arm64.zip"));
                assert!(matches!(source, ArchiveError::MissingBinary(p) if p == binary));
            }
            other => panic!("expected ArchiveFailed, got {other:?}"),
        }
        assert!(!dir.path().join("jqawk-1.2.0-windows-arm64.zip").exists());
    }

    #[tokio::test]
    async fn unwritable_destination_is_archive_failure() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("jqawk");
        std::fs::write(&binary, b"binary").unwrap();

        let err = archive(
            &binary,
            &dir.path().join("missing/jqawk-1.2.0-linux-386"),
            ArchiveKind::TarGzip,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::ArchiveFailed { source: ArchiveError::Io(_), .. }));
    }
}
