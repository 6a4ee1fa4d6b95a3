pub mod analyze;
pub mod ask;
pub mod barcode;
pub mod check;
pub mod reference;

use halal_core::reference::builtin;
use halal_core::reference::store::ReferenceStore;
use std::path::PathBuf;

/// Load the reference store once for a command.
///
/// A broken reference file is reported on stderr and the command carries on
/// with an empty store, so every lookup comes back UNKNOWN.
pub fn load_store(reference: Option<PathBuf>) -> ReferenceStore {
    match reference {
        Some(path) => {
            let (store, err) = ReferenceStore::load_or_empty(&path);
            if let Some(e) = err {
                eprintln!("warning: {e}");
                eprintln!("warning: continuing without reference data; lookups will be UNKNOWN");
            }
            store
        }
        None => builtin::load_builtin().unwrap_or_else(|e| {
            tracing::error!(error = %e, "built-in reference table failed to load");
            eprintln!("warning: {e}");
            ReferenceStore::empty()
        }),
    }
}
