use serde::{Deserialize, Serialize};

/// One row of a reference table, as read from CSV, XLSX or JSON.
///
/// Every field is optional; absent cells are treated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "E-Code", default)]
    pub code: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Explicit classification (HALAL, HARAM or MUSBOOH). May be blank.
    #[serde(rename = "Status_Clean", default)]
    pub status_clean: Option<String>,
    /// Free-text ruling, e.g. "Halal if plant derived".
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl RawRecord {
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The free-text detail: the `Status` column when it has content,
    /// otherwise `Description`.
    pub fn detail_text(&self) -> &str {
        match self.status.as_deref() {
            Some(s) if !is_blank(s) => s,
            _ => self.description.as_deref().unwrap_or(""),
        }
    }

    pub fn explicit_status(&self) -> &str {
        self.status_clean.as_deref().unwrap_or("")
    }
}

/// Blank cells include the `nan` placeholder spreadsheet exports leave behind.
pub(crate) fn is_blank(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.eq_ignore_ascii_case("nan")
}

/// Column names recognised in tabular reference files.
pub const COLUMNS: &[&str] = &["E-Code", "Name", "Status_Clean", "Status", "Description"];
