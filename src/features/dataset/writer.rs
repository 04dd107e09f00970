use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::error::AppError;

pub fn save_csv_table<T>(
    dir: &Path,
    filename: &str,
    header: &[&str],
    rows: &[T],
) -> Result<PathBuf, AppError>
where
    T: Serialize,
{
    fs::create_dir_all(dir)
        .map_err(|err| AppError::write(format!("failed to create {}: {err}", dir.display())))?;

    let path = dir.join(filename);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(|err| AppError::write(format!("failed to create {}: {err}", path.display())))?;

    write_rows(&mut writer, header, rows)
        .map_err(|err| AppError::write(format!("failed to write {}: {err}", path.display())))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "csv saved");
    Ok(path)
}

pub fn render_csv_table<T>(header: &[&str], rows: &[T]) -> Result<String, AppError>
where
    T: Serialize,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    write_rows(&mut writer, header, rows)
        .map_err(|err| AppError::write(format!("failed to render table: {err}")))?;

    let bytes = writer
        .into_inner()
        .map_err(|err| AppError::write(format!("failed to render table: {err}")))?;
    String::from_utf8(bytes)
        .map_err(|err| AppError::write(format!("failed to render table: {err}")))
}

// The header row is written explicitly so an empty table still carries one.
fn write_rows<T, W>(writer: &mut csv::Writer<W>, header: &[&str], rows: &[T]) -> Result<(), csv::Error>
where
    T: Serialize,
    W: Write,
{
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
