use crate::error::HalalError;
use crate::reference::parse_csv;
use crate::reference::schema::RawRecord;
use crate::reference::store::ReferenceStore;

const BUILTIN_REFERENCE_CSV: &str = include_str!("../../../../data/halal-reference.csv");

/// Name shown for the embedded table.
pub const BUILTIN_NAME: &str = "built-in E-code/ingredient table";

/// Rows of the embedded reference table.
pub fn builtin_rows() -> Result<Vec<RawRecord>, HalalError> {
    parse_csv(BUILTIN_REFERENCE_CSV.as_bytes())
}

/// Build a store from the embedded reference table.
pub fn load_builtin() -> Result<ReferenceStore, HalalError> {
    Ok(ReferenceStore::build(&builtin_rows()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReferenceStatus;

    #[test]
    fn test_builtin_loads() {
        let store = load_builtin().unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_builtin_known_entries() {
        let store = load_builtin().unwrap();
        assert_eq!(store.get("E120").unwrap().status, ReferenceStatus::Haram);
        assert_eq!(store.get("e441").unwrap().status, ReferenceStatus::Haram);
        assert_eq!(store.get("E471").unwrap().status, ReferenceStatus::Musbooh);
        assert_eq!(store.get("Water").unwrap().status, ReferenceStatus::Halal);
        assert_eq!(store.get("CURCUMIN"), store.get("E100"));
    }

    #[test]
    fn test_builtin_every_row_has_explicit_status() {
        for row in builtin_rows().unwrap() {
            assert!(
                ReferenceStatus::from_str_loose(row.explicit_status()).is_some(),
                "row {:?} has no explicit status",
                row.name
            );
        }
    }
}
