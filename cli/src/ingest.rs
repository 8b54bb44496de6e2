// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Read spreadsheet and delimited-text exports into records.

use std::{error::Error, fs, path::Path};

use calamine::{Data, Reader, Xlsx, open_workbook};
use termcal_core::{CellValue, Record};

/// Candidate delimiters, scored against the first line of the file.
const DELIMITERS: [u8; 5] = [b',', b';', b'\t', b'|', b':'];

/// A loaded sheet: header names plus one record per data row.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Column names from the first row, trimmed.
    pub headers: Vec<String>,

    /// Data rows keyed by the headers.
    pub records: Vec<Record>,
}

/// Load a schedule export, dispatching on the file extension.
///
/// `.xlsx` and `.xlsm` go through the Excel reader; everything else is
/// treated as delimited text.
pub fn load(
    path: &Path,
    sheet: Option<&str>,
    delimiter: Option<char>,
) -> Result<Sheet, Box<dyn Error>> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("xlsx") | Some("xlsm") => load_workbook(path, sheet),
        _ => load_delimited(path, delimiter),
    }
}

fn load_workbook(path: &Path, sheet: Option<&str>) -> Result<Sheet, Box<dyn Error>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| format!("Failed to open workbook at {}: {}", path.display(), e))?;

    let names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|name| name.as_str() == wanted)
            .cloned()
            .ok_or_else(|| {
                format!("no sheet named '{wanted}', available: {}", names.join(", "))
            })?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| format!("{} has no sheets", path.display()))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| format!("Failed to read sheet '{name}': {e}"))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(row) => row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect::<Vec<_>>(),
        None => return Err(format!("sheet '{name}' is empty").into()),
    };

    let records = rows
        .map(|row| Record::from_row(&headers, row.iter().map(to_cell).collect()))
        .collect::<Vec<_>>();

    tracing::debug!(sheet = %name, rows = records.len(), "loaded workbook");
    Ok(Sheet { headers, records })
}

/// Convert a workbook cell, keeping native date/time cells typed.
fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => text_cell(s),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            None => text_cell(&data.to_string()),
        },
        other => text_cell(&other.to_string()),
    }
}

fn text_cell(s: &str) -> CellValue {
    match s.trim() {
        "" => CellValue::Empty,
        text => CellValue::Text(text.to_string()),
    }
}

fn load_delimited(path: &Path, delimiter: Option<char>) -> Result<Sheet, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let delimiter = match delimiter {
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => return Err(format!("delimiter must be an ASCII character, got '{c}'").into()),
        None => detect_delimiter(&content),
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(false)
        .from_reader(content.as_bytes());

    let mut rows = reader.records();
    let headers = match rows.next() {
        Some(row) => row?
            .iter()
            .map(|cell| cell.trim().to_string())
            .collect::<Vec<_>>(),
        None => return Err(format!("{} is empty", path.display()).into()),
    };

    let mut records = Vec::new();
    for row in rows {
        let cells = row?.iter().map(text_cell).collect();
        records.push(Record::from_row(&headers, cells));
    }

    tracing::debug!(rows = records.len(), "loaded delimited file");
    Ok(Sheet { headers, records })
}

/// Pick the most frequent candidate delimiter in the first line.
/// Ties keep the comma.
fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or_default();
    let mut best = b',';
    let mut max_count = 0;
    for delim in DELIMITERS {
        let count = first_line.bytes().filter(|b| *b == delim).count();
        if count > max_count {
            max_count = count;
            best = delim;
        }
    }
    best
}
