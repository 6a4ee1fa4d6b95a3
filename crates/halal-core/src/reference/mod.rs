pub mod builtin;
pub mod schema;
pub mod store;

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx};

use crate::error::HalalError;
use schema::{RawRecord, COLUMNS};
use store::ReferenceStore;

/// Load reference rows from a CSV, XLSX or JSON file.
pub fn load_reference_file(path: &Path) -> Result<Vec<RawRecord>, HalalError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let bytes = std::fs::read(path).map_err(|e| HalalError::ReferenceLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let parsed = match extension.as_deref() {
        Some("csv") => parse_csv(&bytes),
        Some("xlsx") => parse_xlsx(&bytes),
        Some("json") => parse_json(&bytes),
        _ => return Err(HalalError::UnsupportedReference(path.to_path_buf())),
    };

    parsed.map_err(|e| HalalError::ReferenceLoad {
        path: path.to_path_buf(),
        reason: match e {
            HalalError::ReferenceLoad { reason, .. } => reason,
            other => other.to_string(),
        },
    })
}

impl ReferenceStore {
    /// Build a store from a reference file, degrading to an empty store when
    /// the file cannot be read. The failure is logged and handed back so the
    /// caller can surface it.
    pub fn load_or_empty(path: &Path) -> (ReferenceStore, Option<HalalError>) {
        match load_reference_file(path) {
            Ok(rows) => (ReferenceStore::build(&rows), None),
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "reference data unavailable, continuing with an empty store"
                );
                (ReferenceStore::empty(), Some(e))
            }
        }
    }
}

/// Parse CSV reference rows. Rows that fail to decode are skipped.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<RawRecord>, HalalError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    // Surface a broken header as a load failure rather than an empty table.
    reader.headers()?;

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<RawRecord>().enumerate() {
        match result {
            Ok(record) => rows.push(record),
            Err(e) => {
                tracing::warn!(row = line + 1, error = %e, "skipping malformed reference row");
            }
        }
    }
    Ok(rows)
}

/// Parse JSON reference rows: an array of records keyed by column name.
/// Elements that fail to decode are skipped.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<RawRecord>, HalalError> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;

    let mut rows = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawRecord>(value) {
            Ok(record) => rows.push(record),
            Err(e) => {
                tracing::warn!(row = index + 1, error = %e, "skipping malformed reference row");
            }
        }
    }
    Ok(rows)
}

/// Parse the first worksheet of an XLSX workbook. Row 1 is the header.
pub fn parse_xlsx(bytes: &[u8]) -> Result<Vec<RawRecord>, HalalError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| HalalError::ReferenceLoad {
            path: "<xlsx>".into(),
            reason: format!("failed to open xlsx: {e}"),
        })?;

    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| HalalError::ReferenceLoad {
            path: "<xlsx>".into(),
            reason: "workbook has no worksheets".into(),
        })?
        .map_err(|e| HalalError::ReferenceLoad {
            path: "<xlsx>".into(),
            reason: format!("failed to read worksheet: {e}"),
        })?;

    Ok(records_from_range(&sheet))
}

/// Map worksheet rows to records using the header row's column names.
/// Header matching ignores ASCII case; all-empty rows are dropped.
pub fn records_from_range(sheet: &Range<Data>) -> Vec<RawRecord> {
    let mut sheet_rows = sheet.rows();
    let header: HashMap<&str, usize> = match sheet_rows.next() {
        Some(cells) => cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| {
                let name = cell_as_string(cell)?;
                COLUMNS
                    .iter()
                    .find(|col| col.eq_ignore_ascii_case(&name))
                    .map(|col| (*col, i))
            })
            .collect(),
        None => return Vec::new(),
    };

    let column = |cells: &[Data], name: &str| -> Option<String> {
        header
            .get(name)
            .and_then(|&i| cells.get(i))
            .and_then(cell_as_string)
    };

    sheet_rows
        .map(|cells| RawRecord {
            code: column(cells, "E-Code"),
            name: column(cells, "Name"),
            status_clean: column(cells, "Status_Clean"),
            status: column(cells, "Status"),
            description: column(cells, "Description"),
        })
        .filter(|rec| rec != &RawRecord::default())
        .collect()
}

fn cell_as_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}
