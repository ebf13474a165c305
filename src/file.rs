// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::csv::write_table;
use crate::data::DataSet;
use crate::error::ExportError;

/// Write the table to the file described by `export` (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, data: &DataSet) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path).map_err(|source| ExportError::Io { path: path.clone(), source })?;
    let mut out = BufWriter::new(file);
    write_table(&mut out, data, export.include_headers, export.format.delim())?;
    out.flush().map_err(|source| ExportError::Io { path: path.clone(), source })?;

    info!(path = %path.display(), rows = data.row_count(), "Export: written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
