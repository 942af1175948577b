//! Shared fixtures for release integration tests.
//!
//! A fake `go` stands in for the real toolchain: it honours `-o <path>`,
//! records each `GOOS/GOARCH` pair it was run with, and fails for the target
//! named in `FAKE_GO_FAIL_TARGET`.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const FAKE_GO: &str = r#"#!/bin/sh
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
echo "$GOOS/$GOARCH" >> "$(dirname "$0")/invocations.log"
if [ "$GOOS/$GOARCH" = "${FAKE_GO_FAIL_TARGET:-}" ]; then
  echo "go: unsupported GOOS/GOARCH pair $GOOS/$GOARCH" >&2
  exit 2
fi
printf 'jqawk %s/%s\n' "$GOOS" "$GOARCH" > "$out"
"#;

/// A temporary jqawk checkout with a fake compiler.
pub struct Checkout {
    dir: tempfile::TempDir,
    compiler: PathBuf,
}

impl Checkout {
    /// Creates a checkout whose `jqawk.go` holds `source`.
    pub fn with_source(source: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp checkout");
        std::fs::write(dir.path().join("jqawk.go"), source).expect("write jqawk.go");

        let tools = dir.path().join("tools");
        std::fs::create_dir(&tools).expect("create tools dir");
        let compiler = tools.join("go");
        std::fs::write(&compiler, FAKE_GO).expect("write fake go");
        std::fs::set_permissions(&compiler, std::fs::Permissions::from_mode(0o755))
            .expect("make fake go executable");

        Self { dir, compiler }
    }

    /// Creates a checkout declaring `version`.
    pub fn with_version(version: &str) -> Self {
        Self::with_source(&format!(
            "package main\n\nvar version = \"{version}\"\n\nfunc main() {{}}\n"
        ))
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root().join("build")
    }

    /// The release binary, pointed at this checkout and its fake compiler.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("jqawk-release").expect("binary built");
        cmd.current_dir(self.root())
            .env("JQAWK_RELEASE_COMPILER", &self.compiler)
            .env_remove("JQAWK_RELEASE_SOURCE_ROOT")
            .env_remove("JQAWK_RELEASE_VERSION_FILE")
            .env_remove("JQAWK_RELEASE_STAGING_DIR")
            .env_remove("FAKE_GO_FAIL_TARGET");
        cmd
    }

    /// `GOOS/GOARCH` pairs the fake compiler was run with, in order.
    pub fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(self.root().join("tools/invocations.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Sorted file names in the staging directory.
    pub fn staged_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.build_dir())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}

/// Entry names of a `.tar.gz` archive.
pub fn tar_entries(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).expect("open tarball");
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(file));
    let names = archive
        .entries()
        .expect("read tar entries")
        .map(|e| {
            e.expect("tar entry")
                .path()
                .expect("entry path")
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names
}

/// Entry names of a `.zip` archive.
pub fn zip_entries(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).expect("open zip");
    let archive = zip::ZipArchive::new(file).expect("read zip");
    let names = archive.file_names().map(String::from).collect();
    names
}
