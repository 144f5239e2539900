//! Export helpers for CSV and JSON artifacts of sampled orbital time series.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced while writing artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a buffered writer for the target path, handling stdout (`-`) by
/// convention and creating parent directories as needed.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// A sampled (body × time) table paired with its time grid.
///
/// `rows[j]` holds the series for the j-th sampled body and must have the
/// same length as `times`.
#[derive(Debug, Clone, Copy)]
pub struct SeriesTable<'a> {
    pub times: &'a [f64],
    pub body_names: &'a [String],
    pub rows: &'a [Vec<f64>],
}

/// Write a series table as CSV: one `time` column followed by one column per
/// body. NaN samples are written as empty cells.
pub fn write_series_csv(table: &SeriesTable<'_>, out: impl Write) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    let mut header = vec!["time".to_string()];
    header.extend(table.body_names.iter().cloned());
    writer.write_record(&header)?;

    for (i, t) in table.times.iter().enumerate() {
        let mut record = vec![format!("{t}")];
        for row in table.rows {
            let v = row.get(i).copied().unwrap_or(f64::NAN);
            record.push(if v.is_finite() {
                format!("{v}")
            } else {
                String::new()
            });
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct RunSidecar<'a> {
    system: &'a str,
    body_names: &'a [String],
    times: &'a [f64],
    semi_major_axes: &'a [Vec<f64>],
    distances: &'a [Vec<f64>],
}

/// Write a JSON sidecar bundling both sampled tables for one run.
pub fn write_run_json(
    path: &Path,
    system: &str,
    body_names: &[String],
    times: &[f64],
    semi_major_axes: &[Vec<f64>],
    distances: &[Vec<f64>],
) -> Result<(), ExportError> {
    let sidecar = RunSidecar {
        system,
        body_names,
        times,
        semi_major_axes,
        distances,
    };
    let mut writer = writer_for_path(path)?;
    serde_json::to_writer_pretty(&mut writer, &sidecar)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_layout_has_time_and_body_columns() {
        let times = vec![0.0, 1.0];
        let names = vec!["b".to_string(), "c".to_string()];
        let rows = vec![vec![0.5, 0.6], vec![f64::NAN, 2.0]];
        let table = SeriesTable {
            times: &times,
            body_names: &names,
            rows: &rows,
        };
        let mut buf = Vec::new();
        write_series_csv(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("time,b,c"));
        assert_eq!(lines.next(), Some("0,0.5,"));
        assert_eq!(lines.next(), Some("1,0.6,2"));
    }
}
