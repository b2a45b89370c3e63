//! File I/O utilities with atomic writes
//!
//! Tables are CSV files with a header row. Writes go to a temp file in the
//! same directory which is then renamed over the target, so a table is either
//! the old or the new version, never half-written.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinTrackError;

/// Read all rows of a CSV table
///
/// A missing or empty file is an empty table.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, FinTrackError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let metadata = fs::metadata(path)
        .map_err(|e| FinTrackError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?;
    if metadata.len() == 0 {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| FinTrackError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let row: T = result.map_err(|e| {
            FinTrackError::Storage(format!(
                "Failed to parse {} row {}: {}",
                path.display(),
                idx + 1,
                e
            ))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Write rows to any writer as CSV, header first
///
/// The header is written even when there are no rows.
pub fn write_csv<T, W>(writer: W, header: &[&str], rows: &[T]) -> Result<(), FinTrackError>
where
    T: Serialize,
    W: Write,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(header)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write a CSV table atomically (write to temp, then rename)
pub fn write_csv_atomic<T, P>(path: P, header: &[&str], rows: &[T]) -> Result<(), FinTrackError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FinTrackError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| FinTrackError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, header, rows)
        .map_err(|e| FinTrackError::Storage(format!("Failed to serialize table: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FinTrackError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinTrackError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FinTrackError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
