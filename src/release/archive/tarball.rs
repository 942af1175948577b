//! gzip-compressed tarballs.

use super::entry_name;
use crate::release::error::ArchiveError;
use flate2::{Compression, write::GzEncoder};
use std::{fs::File, path::Path};

/// Writes `out_path` as a `.tar.gz` holding `binary_path` under its file name.
///
/// Headers carry no owner or timestamp, so identical binaries produce
/// identical tar streams. The executable bit is preserved.
pub fn create_tar_gz(binary_path: &Path, out_path: &Path) -> Result<(), ArchiveError> {
    let name = entry_name(binary_path)?;

    let out = File::create(out_path)?;
    let encoder = GzEncoder::new(out, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.mode(tar::HeaderMode::Deterministic);

    builder.append_path_with_name(binary_path, &name)?;

    let encoder = builder.into_inner()?;
    encoder.finish()?.sync_all()?;
    Ok(())
}
