use serde::Serialize;

use crate::model::{Status, StatusResult};
use crate::reference::store::ReferenceStore;

pub const NOT_FOUND_DETAIL: &str = "Not found in local database";

/// Resolve a single E-code or ingredient name against the reference store.
///
/// Casing and surrounding whitespace in `term` are ignored.
pub fn resolve(term: &str, store: &ReferenceStore) -> StatusResult {
    match store.get(term) {
        Some(entry) => StatusResult {
            status: entry.status.into(),
            detail: entry.detail.clone(),
        },
        None => StatusResult {
            status: Status::Unknown,
            detail: NOT_FOUND_DETAIL.to_string(),
        },
    }
}

/// A term from a user lookup paired with its resolution.
#[derive(Debug, Clone, Serialize)]
pub struct TermLookup {
    pub term: String,
    #[serde(flatten)]
    pub result: StatusResult,
}

/// Resolve every comma-separated term in `input`, in input order.
pub fn check_terms(input: &str, store: &ReferenceStore) -> Vec<TermLookup> {
    input
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(|term| TermLookup {
            term: term.to_string(),
            result: resolve(term, store),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::schema::RawRecord;

    fn store() -> ReferenceStore {
        let rows = vec![RawRecord {
            code: Some("E441".into()),
            name: Some("Gelatine".into()),
            status_clean: Some("HARAM".into()),
            status: Some("Pig derived".into()),
            description: None,
        }];
        ReferenceStore::build(&rows)
    }

    #[test]
    fn test_resolve_hit_is_case_and_space_insensitive() {
        let store = store();
        let a = resolve("E441", &store);
        let b = resolve("  e441\t", &store);
        let c = resolve("gelatine", &store);
        assert_eq!(a.status, Status::Haram);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.detail, "Gelatine: Pig derived");
    }

    #[test]
    fn test_resolve_miss_is_unknown() {
        let r = resolve("xyzzy", &store());
        assert_eq!(r.status, Status::Unknown);
        assert_eq!(r.detail, NOT_FOUND_DETAIL);
    }

    #[test]
    fn test_check_terms_splits_and_skips_blanks() {
        let lookups = check_terms("E441, , xyzzy ,", &store());
        assert_eq!(lookups.len(), 2);
        assert_eq!(lookups[0].term, "E441");
        assert_eq!(lookups[0].result.status, Status::Haram);
        assert_eq!(lookups[1].term, "xyzzy");
        assert_eq!(lookups[1].result.status, Status::Unknown);
    }
}
