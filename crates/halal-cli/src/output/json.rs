use halal_core::error::HalalError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), HalalError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
