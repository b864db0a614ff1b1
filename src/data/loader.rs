//! CSV Data Loader Module
//! Reads the monthly sales CSV (header + `month,sales,expenses` lines) into records.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};

/// Number of fields every data line must split into.
const FIELD_COUNT: usize = 3;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("Could not parse data on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One month of sales data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub month: String,
    pub sales: i64,
    pub expenses: i64,
}

impl Record {
    pub fn new(month: impl Into<String>, sales: i64, expenses: i64) -> Self {
        Self {
            month: month.into(),
            sales,
            expenses,
        }
    }
}

/// Load a CSV file, logging any failure and returning an empty list instead.
///
/// An empty result therefore means either "no data lines" or "could not load";
/// use [`load_records`] when the caller needs to tell those apart.
pub fn read_records(path: impl AsRef<Path>) -> Vec<Record> {
    let path = path.as_ref();
    match load_records(path) {
        Ok(records) => {
            info!("Loaded {} records from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            error!("Error loading {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Load a CSV file into records.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        io::ErrorKind::InvalidData => LoadError::Parse {
            line: 0,
            message: "file is not valid UTF-8".to_string(),
        },
        _ => LoadError::Io(e),
    })?;

    parse_records(&content)
}

/// Parse CSV text into records.
///
/// The first line is the header and is dropped without looking at it. Blank lines
/// are skipped; any other line must hold exactly three comma separated fields.
/// Lines may end in `\n`, `\r\n` or a lone `\r`.
pub fn parse_records(content: &str) -> Result<Vec<Record>, LoadError> {
    let Some(body) = skip_header(content) else {
        return Ok(Vec::new());
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| LoadError::Parse {
            line: e.position().map(file_line).unwrap_or(0),
            message: e.to_string(),
        })?;
        let line = row.position().map(file_line).unwrap_or(0);

        if is_blank(&row) {
            debug!("Skipping blank line {}", line);
            continue;
        }

        if row.len() != FIELD_COUNT {
            return Err(LoadError::Parse {
                line,
                message: format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
            });
        }

        records.push(Record {
            month: row[0].to_string(),
            sales: parse_amount(&row[1], "sales", line)?,
            expenses: parse_amount(&row[2], "expenses", line)?,
        });
    }

    Ok(records)
}

/// Everything after the first line, or `None` when there is no line break.
fn skip_header(content: &str) -> Option<&str> {
    let end = content.find(|c: char| c == '\r' || c == '\n')?;
    let rest = &content[end..];
    Some(rest.strip_prefix("\r\n").unwrap_or(&rest[1..]))
}

/// Base-10 integer; no hex, separators or currency symbols.
fn parse_amount(field: &str, name: &str, line: usize) -> Result<i64, LoadError> {
    field.parse::<i64>().map_err(|e| LoadError::Parse {
        line,
        message: format!("invalid {} value '{}': {}", name, field, e),
    })
}

/// Physical line number in the file; the reader starts after the header.
fn file_line(pos: &csv::Position) -> usize {
    pos.line() as usize + 1
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(str::is_empty) && row.len() <= 1
}
