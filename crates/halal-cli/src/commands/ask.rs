use halal_core::assistant::route;
use halal_core::error::HalalError;
use std::path::PathBuf;

use crate::commands::load_store;
use crate::output;

pub fn run(reference: Option<PathBuf>, query: &str, output_format: &str) -> Result<(), HalalError> {
    let store = load_store(reference);
    let response = route(query, &store);

    match output_format {
        "json" => output::json::print(&response)?,
        _ => output::table::print_route(&response),
    }

    Ok(())
}
