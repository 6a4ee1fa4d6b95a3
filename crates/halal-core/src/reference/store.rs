use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::ReferenceStatus;
use crate::reference::schema::{is_blank, RawRecord};

/// A normalized reference entry, shared by its E-code key and its name key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub code: Option<String>,
    pub name: Option<String>,
    pub status: ReferenceStatus,
    /// `"<name>: <detail text>"`.
    pub detail: String,
}

impl ReferenceEntry {
    /// Derive an entry from a raw row, classifying from the detail text when
    /// the explicit status is blank.
    pub fn from_record(record: &RawRecord) -> ReferenceEntry {
        let detail_text = record.detail_text();
        let explicit = record.explicit_status();
        let status = if is_blank(explicit) {
            ReferenceStatus::from_description(detail_text)
        } else {
            ReferenceStatus::from_str_loose(explicit)
                .unwrap_or_else(|| ReferenceStatus::from_description(detail_text))
        };

        ReferenceEntry {
            code: non_empty_key(record.code()),
            name: non_empty_key(record.name()),
            status,
            detail: format!("{}: {}", record.name(), detail_text),
        }
    }
}

/// Immutable lookup over E-codes and ingredient names.
///
/// Keys are trimmed and uppercased. When two rows produce the same key the
/// later row wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    entries: Vec<ReferenceEntry>,
    index: HashMap<String, usize>,
}

/// Entry counts for a loaded store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of lookup keys (codes plus names).
    pub keys: usize,
    /// Number of distinct entries still reachable through some key.
    pub entries: usize,
    pub by_status: BTreeMap<String, usize>,
}

impl ReferenceStore {
    pub fn build<'a, I>(rows: I) -> ReferenceStore
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut store = ReferenceStore::default();
        for record in rows {
            let entry = ReferenceEntry::from_record(record);
            if entry.code.is_none() && entry.name.is_none() {
                continue;
            }
            let idx = store.entries.len();
            if let Some(code) = &entry.code {
                store.index.insert(code.clone(), idx);
            }
            if let Some(name) = &entry.name {
                store.index.insert(name.clone(), idx);
            }
            store.entries.push(entry);
        }
        tracing::info!(keys = store.index.len(), "reference store built");
        store
    }

    pub fn empty() -> ReferenceStore {
        ReferenceStore::default()
    }

    /// Look up a term; the term is normalized the same way keys are.
    pub fn get(&self, term: &str) -> Option<&ReferenceEntry> {
        self.index
            .get(&normalize_key(term))
            .map(|&idx| &self.entries[idx])
    }

    /// Number of lookup keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        let live: HashSet<usize> = self.index.values().copied().collect();
        let mut by_status = BTreeMap::new();
        for &idx in &live {
            *by_status
                .entry(self.entries[idx].status.to_string())
                .or_insert(0) += 1;
        }
        StoreStats {
            keys: self.index.len(),
            entries: live.len(),
            by_status,
        }
    }
}

/// Trim and uppercase a lookup key.
pub fn normalize_key(s: &str) -> String {
    s.trim().to_uppercase()
}

fn non_empty_key(s: &str) -> Option<String> {
    let key = normalize_key(s);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}
