use halal_core::error::HalalError;
use halal_core::resolver::check_terms;
use std::path::PathBuf;

use crate::commands::load_store;
use crate::output;

pub fn run(reference: Option<PathBuf>, terms: &str, output_format: &str) -> Result<(), HalalError> {
    let store = load_store(reference);
    let lookups = check_terms(terms, &store);

    if lookups.is_empty() {
        eprintln!("Enter a value to check.");
        return Ok(());
    }

    match output_format {
        "json" => output::json::print(&lookups)?,
        _ => output::table::print_lookups(&lookups),
    }

    Ok(())
}
