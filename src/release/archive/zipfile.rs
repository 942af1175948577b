//! Zip archives.

use super::entry_name;
use crate::release::error::ArchiveError;
use std::{fs::File, io, path::Path};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Writes `out_path` as a `.zip` holding `binary_path` under its file name.
pub fn create_zip(binary_path: &Path, out_path: &Path) -> Result<(), ArchiveError> {
    let name = entry_name(binary_path)?;
    let mut binary = File::open(binary_path)?;

    let out = File::create(out_path)?;
    let mut zip = ZipWriter::new(out);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);

    zip.start_file(name, options)?;
    io::copy(&mut binary, &mut zip)?;

    zip.finish()?.sync_all()?;
    Ok(())
}
