use halal_core::analysis::ingredients::{HARAM_KEYWORDS, KEYWORD_DETAIL};
use halal_core::error::HalalError;
use halal_core::reference::builtin::BUILTIN_NAME;
use halal_core::reference::load_reference_file;
use halal_core::reference::store::ReferenceStore;
use std::path::{Path, PathBuf};

use crate::commands::load_store;

pub fn stats(reference: Option<PathBuf>) -> Result<(), HalalError> {
    let source = reference
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| BUILTIN_NAME.to_string());
    let stats = load_store(reference).stats();

    println!("Reference data: {source}\n");
    println!("  Database size:  {} entries", stats.keys);
    println!("  Distinct items: {}", stats.entries);
    for (status, count) in &stats.by_status {
        println!("    {:<8} {}", status, count);
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), HalalError> {
    let rows = load_reference_file(file)?;
    let store = ReferenceStore::build(&rows);

    println!("Reference file '{}' is readable.", file.display());
    println!("  Rows: {}", rows.len());
    println!("  Lookup keys: {}", store.len());

    let mut warnings = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if row.code().trim().is_empty() && row.name().trim().is_empty() {
            warnings.push(format!("row {} has neither E-Code nor Name and is ignored", i + 1));
        }
        if row.detail_text().trim().is_empty() {
            warnings.push(format!(
                "row {} ('{}') has no Status or Description text",
                i + 1,
                row.name()
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

pub fn keywords() -> Result<(), HalalError> {
    println!("Ingredients not found in the reference table are reported as");
    println!("MUSBOOH (\"{KEYWORD_DETAIL}\") when they contain any of:\n");
    for keyword in HARAM_KEYWORDS {
        println!("  {keyword}");
    }
    println!("\nA keyword match never makes an ingredient HARAM on its own.");
    Ok(())
}
