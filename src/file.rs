// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::csv::{build_row, header_row, write_row};
use crate::data::{ClueRecord, ShowMetadata};

/// Create/truncate `path` and write the header plus one row per record.
/// The header always goes out, so a clue-less page still yields a valid
/// (header-only) file.
pub fn write_output(
    path: &Path,
    meta: &ShowMetadata,
    records: &[ClueRecord],
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_row(&mut out, &header_row())?;
    for r in records {
        write_row(&mut out, &build_row(meta, r))?;
    }
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
