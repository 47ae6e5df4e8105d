//! Flat numeric files: one row per line, values separated by whitespace.
//!
//! Values are written with the shortest representation that parses back to
//! the same `f64`, so a dump read with [`read_column`] is bit-identical to
//! what was written.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::{ErrorInfo, SchError};

/// Writes each value followed by a single space, then a newline.
pub fn fmt_row(f: &mut impl fmt::Write, row: &[f64]) -> fmt::Result {
    for value in row {
        write!(f, "{value} ")?;
    }
    writeln!(f)
}

/// Writes one row per line in the `value value ... \n` layout of [`fmt_row`].
pub fn write_rows<R>(path: &Path, rows: impl IntoIterator<Item = R>) -> Result<(), SchError>
where
    R: AsRef<[f64]>,
{
    let mut line = String::new();
    write_lines(path, |out| {
        for row in rows {
            line.clear();
            fmt_row(&mut line, row.as_ref()).map_err(std::io::Error::other)?;
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    })
}

/// Writes one value per line with no trailing separator.
pub fn write_column(path: &Path, values: impl IntoIterator<Item = f64>) -> Result<(), SchError> {
    write_lines(path, |out| {
        for value in values {
            writeln!(out, "{value}")?;
        }
        Ok(())
    })
}

fn write_lines(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<(), SchError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| SchError::io("sink_create_dir", parent, err))?;
    }
    let file = File::create(path).map_err(|err| SchError::io("sink_open", path, err))?;
    let mut out = BufWriter::new(file);
    body(&mut out).map_err(|err| SchError::io("sink_write", path, err))?;
    out.flush().map_err(|err| SchError::io("sink_flush", path, err))
}

/// Reads every whitespace separated value of a flat numeric file, in order.
pub fn read_column(path: &Path) -> Result<Vec<f64>, SchError> {
    let raw = fs::read_to_string(path).map_err(|err| SchError::io("sink_read", path, err))?;
    parse_column(&raw).map_err(|err| match err {
        SchError::Serde(info) => {
            SchError::Serde(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}

/// Parses the text of a flat numeric dump.
pub fn parse_column(raw: &str) -> Result<Vec<f64>, SchError> {
    let mut values = Vec::new();
    for (line_no, line) in raw.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<f64>().map_err(|err| {
                SchError::Serde(
                    ErrorInfo::new("sink_parse", err.to_string())
                        .with_context("line", (line_no + 1).to_string())
                        .with_context("token", token),
                )
            })?;
            values.push(value);
        }
    }
    Ok(values)
}
